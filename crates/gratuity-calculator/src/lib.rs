#![deny(warnings)]
//! Tip calculation for gratuity-inclusive totals.
//!
//! This crate provides [`calculate_total`] for computing a total charge
//! including a percentage-based tip, together with the [`CalculatorError`]
//! type used to reject invalid (negative) inputs.

mod error;
mod tip;

pub use error::{CalculatorError, CalculatorResult};
pub use tip::calculate_total;
