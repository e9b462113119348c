//! Fixed deployment parameters.

/// 1,000,000 whole tokens at 18 decimals.
pub const INITIAL_SUPPLY: i128 = 1_000_000 * 10_i128.pow(TOKEN_DECIMALS);
pub const TOKEN_DECIMALS: u32 = 18;
pub const TOKEN_NAME: &str = "Fixed Supply Token";
pub const TOKEN_SYMBOL: &str = "FST";
