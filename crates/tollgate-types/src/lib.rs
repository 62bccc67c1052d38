//! Core types for the toll-road vehicle registry

mod category;
mod error;

pub use category::*;
pub use error::*;

use rust_decimal::Decimal;

/// Sequential vehicle identifier, assigned in creation order starting at 1
pub type VehicleId = u32;

/// Render an amount as currency with two decimals (e.g. "$2.00")
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_pads_decimals() {
        assert_eq!(format_currency(Decimal::new(6, 0), "$"), "$6.00");
        assert_eq!(format_currency(Decimal::ZERO, "$"), "$0.00");
    }

    #[test]
    fn test_format_currency_custom_symbol() {
        assert_eq!(format_currency(Decimal::new(250, 2), "€"), "€2.50");
        assert_eq!(format_currency(Decimal::new(1, 0), ""), "1.00");
    }
}
