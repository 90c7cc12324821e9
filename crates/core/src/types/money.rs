//! Money helpers for optional catalog amounts.
//!
//! Product price and quantity are both optional. Every aggregation site
//! (cart totals, catalog summary) must treat an absent value as zero rather
//! than an error, and must do so through these reducers so the behavior
//! stays uniform.

use rust_decimal::Decimal;

/// Reduce an optional price to a concrete amount, treating absent as zero.
#[must_use]
pub fn price_or_zero(price: Option<Decimal>) -> Decimal {
    price.unwrap_or(Decimal::ZERO)
}

/// Reduce an optional quantity to a concrete count, treating absent as zero.
#[must_use]
pub fn quantity_or_zero(quantity: Option<u32>) -> u32 {
    quantity.unwrap_or(0)
}

/// Format a decimal amount as a dollar price string, e.g. `$19.99`.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_amounts_reduce_to_zero() {
        assert_eq!(price_or_zero(None), Decimal::ZERO);
        assert_eq!(price_or_zero(Some(Decimal::new(999, 2))), Decimal::new(999, 2));
        assert_eq!(quantity_or_zero(None), 0);
        assert_eq!(quantity_or_zero(Some(3)), 3);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
        assert_eq!(format_usd(Decimal::new(999, 2)), "$9.99");
        assert_eq!(format_usd(Decimal::new(4995, 2)), "$49.95");
        assert_eq!(format_usd(Decimal::new(5, 0)), "$5.00");
    }
}
