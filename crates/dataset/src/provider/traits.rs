//! Holdings provider trait definition.

use async_trait::async_trait;

use crate::errors::DatasetError;
use crate::models::{RawTable, SheetRef};

/// Trait for holdings dataset sources.
///
/// Implement this trait to add support for a new tabular source. A provider
/// returns the worksheet as a [`RawTable`]; schema validation and typed row
/// parsing happen downstream in the loader, so providers stay decode-only.
#[async_trait]
pub trait HoldingsProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "GOOGLE_SHEETS". Used for logging
    /// and error reporting.
    fn id(&self) -> &'static str;

    /// Fetch the worksheet identified by `source`.
    ///
    /// # Errors
    ///
    /// Any fetch or decode failure is returned as a [`DatasetError`] and is
    /// not retried.
    async fn fetch(&self, source: &SheetRef) -> Result<RawTable, DatasetError>;
}
