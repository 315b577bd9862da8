//! Application-wide constants.

use rust_decimal::Decimal;

/// Number of decimal places used for cash-moving amounts.
pub const MONEY_SCALE: u32 = 2;

/// Cash credited to every newly registered user.
pub fn starting_balance() -> Decimal {
    Decimal::new(1_000_000, MONEY_SCALE) // 10,000.00
}

/// Default sector assigned to stocks created without one.
pub const DEFAULT_SECTOR: &str = "Uncategorized";

/// Maximum number of rows returned by a stock symbol/name search.
pub const SEARCH_RESULT_LIMIT: i64 = 20;

/// Minimum length of a stock search query.
pub const MIN_SEARCH_QUERY_LEN: usize = 2;

/// Number of recent transactions included in the portfolio summary.
pub const RECENT_TRANSACTIONS_LIMIT: i64 = 5;

/// Default page size for the transaction history listing.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
