//! Clientfolio Dataset Crate
//!
//! This crate owns the external-data boundary of the holdings dashboard:
//! fetching a spreadsheet-backed holdings table, validating its schema,
//! and caching the loaded result.
//!
//! # Overview
//!
//! - [`SheetRef`] - stable reference to one worksheet of a data source
//! - [`HoldingsProvider`] - trait implemented by concrete fetchers
//!   ([`GoogleSheetsProvider`], [`CsvFileProvider`])
//! - [`DatasetLoader`] - validates required columns, parses rows into
//!   [`HoldingRecord`]s, and serves cached [`HoldingsTable`]s
//! - [`TableCache`] - TTL cache of loaded tables, lock-free reads
//!
//! Loaded tables are immutable and shared as `Arc<HoldingsTable>`; consumers
//! never mutate cache contents. Fetch failures are surfaced as
//! [`DatasetError`] and are not retried.

pub mod cache;
pub mod errors;
pub mod loader;
pub mod models;
pub mod provider;
pub mod schema;

// Re-export the public surface
pub use cache::TableCache;
pub use errors::DatasetError;
pub use loader::DatasetLoader;
pub use models::{HoldingRecord, HoldingsTable, RawTable, SheetRef};
pub use provider::{CsvFileProvider, GoogleSheetsProvider, HoldingsProvider};
pub use schema::{ColumnIndex, REQUIRED_COLUMNS};
