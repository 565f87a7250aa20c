//! Dataset models
//!
//! - `record` - one typed row of the holdings table ([`HoldingRecord`])
//! - `table` - decoded payloads and loaded tables ([`RawTable`], [`HoldingsTable`])
//! - `source` - stable data-source references ([`SheetRef`])

mod record;
mod source;
mod table;

pub use record::HoldingRecord;
pub use source::SheetRef;
pub use table::{HoldingsTable, RawTable};
