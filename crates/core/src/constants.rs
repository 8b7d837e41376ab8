/// Decimal precision for currency amounts
pub const CURRENCY_DECIMAL_PRECISION: u32 = 2;

/// Display placeholder for catalog references that cannot be resolved
pub const UNKNOWN_REFERENCE_LABEL: &str = "Unknown";
