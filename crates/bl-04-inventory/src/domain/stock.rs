//! Stock level classification.

use shared_types::StockLevel;

/// Derives the stock category from a raw unit count.
///
/// ```text
/// 0        -> critical
/// 1..=4    -> low
/// 5..=19   -> adequate
/// 20..     -> full
/// ```
///
/// Pure; every write of a unit count re-derives the level through this
/// function in the same operation, so a stored level is never stale.
pub fn classify(units: u32) -> StockLevel {
    match units {
        0 => StockLevel::Critical,
        1..=4 => StockLevel::Low,
        5..=19 => StockLevel::Adequate,
        _ => StockLevel::Full,
    }
}
