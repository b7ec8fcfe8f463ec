//! Calculator for adding a percentage-based tip to a base amount
//!
//! The tip rate is expressed in percent points: a 5% tip on 10 yields a
//! total of 10.5 (10 + 10*5/100).

use crate::error::{CalculatorError, CalculatorResult};

/// Computes the total charge including a percentage-based tip.
///
/// # Arguments
/// * `amount` - Base amount to which the tip will be added
/// * `tip_percent` - Tip rate in percent points (e.g., 5.0 for 5%)
///
/// # Errors
/// Returns [`CalculatorError::InvalidArgument`] when either input is
/// negative. No other failure mode exists; the computation itself is pure
/// `f64` arithmetic with no rounding.
pub fn calculate_total(amount: f64, tip_percent: f64) -> CalculatorResult<f64> {
    if amount < 0.0 || tip_percent < 0.0 {
        return Err(CalculatorError::invalid_argument(
            "Amount and tip cannot be negative",
        ));
    }
    Ok(amount + (amount * tip_percent / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_yields_zero_total() {
        assert_eq!(calculate_total(0.0, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn zero_tip_leaves_amount_unchanged() {
        assert_eq!(calculate_total(10.0, 0.0).unwrap(), 10.0);
    }

    // NaN is neither negative nor positive, so it passes validation and
    // propagates through the arithmetic.
    #[test]
    fn nan_amount_propagates() {
        assert!(calculate_total(f64::NAN, 5.0).unwrap().is_nan());
    }
}
