//! Lenient normalization of raw form input.
//!
//! A live-editing invoice form sends field values after every keystroke, so
//! values are routinely empty or half-typed. These helpers degrade malformed
//! input to zero instead of erroring; strict checks belong to
//! [`crate::utils::validation`] and run when a document is finalized.

use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Parse a monetary or quantity field. Empty, non-numeric, or negative
/// input yields 0.
pub fn parse_amount(input: &str) -> BigDecimal {
    let parsed = BigDecimal::from_str(input.trim()).unwrap_or_else(|_| BigDecimal::from(0));
    if parsed < BigDecimal::from(0) {
        BigDecimal::from(0)
    } else {
        parsed
    }
}

/// Parse a percentage field, clamped to [0, 100]. Empty or non-numeric
/// input yields 0.
pub fn parse_percent(input: &str) -> BigDecimal {
    let parsed = parse_amount(input);
    if parsed > BigDecimal::from(100) {
        BigDecimal::from(100)
    } else {
        parsed
    }
}
