/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of products shown in the top-holdings summary
pub const TOP_HOLDINGS_LIMIT: usize = 5;

/// Placeholder shown where an aggregate is undefined (e.g. a mean over an
/// empty client subset)
pub const NO_DATA_PLACEHOLDER: &str = "—";
