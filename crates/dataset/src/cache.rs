//! In-memory cache of loaded holdings tables.
//!
//! Entries are complete tables behind `Arc`: a refresh builds the whole
//! replacement table before swapping the entry, so readers always observe
//! a consistent, fully loaded table. Reads are lock-free.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::models::HoldingsTable;

#[derive(Clone)]
struct CachedTable {
    cached_at: DateTime<Utc>,
    table: Arc<HoldingsTable>,
}

/// TTL cache of loaded tables, keyed by sheet reference.
///
/// Without a TTL, entries live for the process lifetime.
pub struct TableCache {
    entries: DashMap<String, CachedTable>,
    ttl: Option<chrono::Duration>,
}

impl TableCache {
    /// Create a cache whose entries never expire.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            ttl: None,
        }
    }

    /// Create a cache whose entries expire `ttl` after insertion.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: chrono::Duration::from_std(ttl).ok(),
        }
    }

    /// The cached table for `key`, if present and fresh.
    pub fn get(&self, key: &str) -> Option<Arc<HoldingsTable>> {
        let entry = self.entries.get(key)?;
        if self.is_expired(&entry) {
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(entry.table.clone())
    }

    /// Store a fully built table under `key`, replacing any previous entry.
    pub fn insert(&self, key: String, table: Arc<HoldingsTable>) {
        self.entries.insert(
            key,
            CachedTable {
                cached_at: Utc::now(),
                table,
            },
        );
    }

    /// Drop the entry for `key`, forcing the next load to re-fetch.
    pub fn invalidate(&self, key: &str) {
        self.entries.remove(key);
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_expired(&self, entry: &CachedTable) -> bool {
        match self.ttl {
            Some(ttl) => Utc::now().signed_duration_since(entry.cached_at) >= ttl,
            None => false,
        }
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_table(source: &str) -> Arc<HoldingsTable> {
        Arc::new(HoldingsTable::new(source, Vec::new()))
    }

    #[test]
    fn test_cache_set_get() {
        let cache = TableCache::new();
        cache.insert("sheet#0".to_string(), create_test_table("sheet#0"));

        let cached = cache.get("sheet#0").unwrap();
        assert_eq!(cached.source(), "sheet#0");
    }

    #[test]
    fn test_cache_miss() {
        let cache = TableCache::new();
        assert!(cache.get("absent").is_none());
    }

    #[test]
    fn test_cache_hit_returns_same_table() {
        let cache = TableCache::new();
        let table = create_test_table("sheet#0");
        cache.insert("sheet#0".to_string(), table.clone());

        let cached = cache.get("sheet#0").unwrap();
        assert!(Arc::ptr_eq(&table, &cached));
    }

    #[test]
    fn test_invalidate_removes_entry() {
        let cache = TableCache::new();
        cache.insert("sheet#0".to_string(), create_test_table("sheet#0"));
        cache.invalidate("sheet#0");
        assert!(cache.get("sheet#0").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_expired_entry_is_dropped() {
        let cache = TableCache::with_ttl(Duration::from_millis(1));
        cache.insert("sheet#0".to_string(), create_test_table("sheet#0"));

        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("sheet#0").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_entries_without_ttl_do_not_expire() {
        let cache = TableCache::new();
        cache.insert("sheet#0".to_string(), create_test_table("sheet#0"));

        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get("sheet#0").is_some());
    }
}
