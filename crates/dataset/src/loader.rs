//! Dataset loader: fetch, validate, parse, cache.
//!
//! The loader is an explicit handle owned by the caller; there is no
//! process-wide connection state. One loader wraps one provider and one
//! cache, and can serve any number of sheet references.

use std::str::FromStr;
use std::sync::Arc;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::cache::TableCache;
use crate::errors::DatasetError;
use crate::models::{HoldingRecord, HoldingsTable, RawTable, SheetRef};
use crate::provider::HoldingsProvider;
use crate::schema::ColumnIndex;

/// Loads, validates, and caches holdings tables.
pub struct DatasetLoader {
    provider: Arc<dyn HoldingsProvider>,
    cache: TableCache,
}

impl DatasetLoader {
    /// A loader whose cached tables live for the process lifetime.
    pub fn new(provider: Arc<dyn HoldingsProvider>) -> Self {
        Self {
            provider,
            cache: TableCache::new(),
        }
    }

    /// A loader with an explicit cache (e.g. one built with a TTL).
    pub fn with_cache(provider: Arc<dyn HoldingsProvider>, cache: TableCache) -> Self {
        Self { provider, cache }
    }

    /// The holdings table for `source`, from cache when fresh.
    ///
    /// A cache hit returns the identical immutable table a fresh fetch
    /// produced at load time; downstream consumers cannot mutate it.
    ///
    /// # Errors
    ///
    /// Fetch failures and schema violations are surfaced as-is; nothing is
    /// retried.
    pub async fn load(&self, source: &SheetRef) -> Result<Arc<HoldingsTable>, DatasetError> {
        let key = source.cache_key();
        if let Some(table) = self.cache.get(&key) {
            debug!("Holdings table cache hit for {}", key);
            return Ok(table);
        }

        let table = self.load_uncached(source).await?;
        self.cache.insert(key, table.clone());
        Ok(table)
    }

    /// Fetch and parse `source`, bypassing the cache.
    pub async fn load_uncached(
        &self,
        source: &SheetRef,
    ) -> Result<Arc<HoldingsTable>, DatasetError> {
        debug!(
            "Fetching holdings table {} via {}",
            source.cache_key(),
            self.provider.id()
        );
        let raw = self.provider.fetch(source).await?;
        let index = ColumnIndex::resolve(&raw.columns)?;
        let records = parse_records(&raw, &index);
        debug!(
            "Loaded {} holdings rows from {}",
            records.len(),
            source.cache_key()
        );
        Ok(Arc::new(HoldingsTable::new(source.cache_key(), records)))
    }

    /// Evict the cached table for `source`.
    pub fn invalidate(&self, source: &SheetRef) {
        self.cache.invalidate(&source.cache_key());
    }
}

fn parse_records(raw: &RawTable, index: &ColumnIndex) -> Vec<HoldingRecord> {
    let mut records = Vec::with_capacity(raw.rows.len());
    for (row_number, row) in raw.rows.iter().enumerate() {
        match parse_row(row, index) {
            Ok(record) => records.push(record),
            // Sheet rows are 1-based and the header occupies row 1
            Err(column) => warn!(
                "Skipping sheet row {}: unparseable value in column '{}'",
                row_number + 2,
                column
            ),
        }
    }
    records
}

/// Parse one raw row; on failure the offending column name is returned.
fn parse_row(row: &[String], index: &ColumnIndex) -> Result<HoldingRecord, &'static str> {
    Ok(HoldingRecord {
        client_id: text_cell(row, index.client_id).ok_or("Client ID")?,
        client_name: text_cell(row, index.client_name).ok_or("Client Name")?,
        product_name: text_cell(row, index.product_name).ok_or("Product Name")?,
        investment_amount: decimal_cell(row, index.investment_amount)
            .ok_or("Investment Amount")?,
        market_value: decimal_cell(row, index.market_value).ok_or("Market Value")?,
        sector: text_cell(row, index.sector).ok_or("Sector")?,
        risk_level: text_cell(row, index.risk_level).ok_or("Risk Level")?,
        annualized_expected_growth: float_cell(row, index.annualized_expected_growth)
            .ok_or("Annualized Expected Growth")?,
        actual_annual_growth: float_cell(row, index.actual_annual_growth)
            .ok_or("Actual Annual Growth")?,
    })
}

fn text_cell(row: &[String], position: usize) -> Option<String> {
    row.get(position).map(|cell| cell.trim().to_string())
}

fn decimal_cell(row: &[String], position: usize) -> Option<Decimal> {
    Decimal::from_str(&normalize_numeric(row.get(position)?)).ok()
}

fn float_cell(row: &[String], position: usize) -> Option<f64> {
    normalize_numeric(row.get(position)?).parse().ok()
}

/// Strip the decorations spreadsheet exports put on numbers: currency
/// prefixes, thousands separators, percent suffixes, surrounding space.
fn normalize_numeric(cell: &str) -> String {
    cell.trim().replace(['$', ',', '%'], "")
}
