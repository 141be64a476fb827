//! Fixed-point amount input handling
//!
//! On-chain token amounts are integers scaled by `10^decimals`. This module
//! turns free-form user text into that exact representation without ever going
//! through floating point: a keystroke either produces a clamped decimal
//! string, or is rejected and the previous text stands. Parsing never panics
//! and never rounds.

use alloy::primitives::U256;

use crate::constants::pow10;

/// Accept or reject a text edit to an amount field.
///
/// Commas are normalized to `.` so pasted European-format numbers work.
/// Anything that is not `digits? ('.' digits?)?` keeps `previous` unchanged.
/// An accepted fraction longer than `decimals` digits is truncated, never
/// rounded.
pub fn sanitize_amount_input(previous: &str, input: &str, decimals: u8) -> String {
    let normalized = input.replace(',', ".");
    if !is_amount_text(&normalized) {
        return previous.to_string();
    }
    truncate_to_decimals(&normalized, decimals)
}

/// At most one separator, digits everywhere else. Empty text is valid.
fn is_amount_text(text: &str) -> bool {
    let mut seen_separator = false;
    for c in text.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_separator => seen_separator = true,
            _ => return false,
        }
    }
    true
}

/// Clamp the fractional part of `text` to `decimals` digits.
///
/// Idempotent: re-applying with the same precision is a no-op. Must run every
/// time the field's precision changes (e.g. the user switches to a token with
/// fewer decimals), not just on keystrokes.
pub fn truncate_to_decimals(text: &str, decimals: u8) -> String {
    match text.split_once('.') {
        Some((whole, frac)) if frac.len() > decimals as usize => {
            format!("{whole}.{}", &frac[..decimals as usize])
        }
        _ => text.to_string(),
    }
}

/// Parse a decimal string into its exact fixed-point integer at `decimals`
/// precision.
///
/// Empty text and a bare `"."` parse as zero (the user is mid-edit). Returns
/// `None` when the text has more fractional digits than `decimals`, contains
/// anything but digits and one separator, or does not fit in a `U256` — the
/// caller keeps its last good value.
pub fn parse_units(text: &str, decimals: u8) -> Option<U256> {
    let text = if text.is_empty() { "0" } else { text };
    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };

    if frac.len() > decimals as usize {
        return None;
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let whole_units = if whole.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(whole, 10).ok()?
    };
    let mut amount = whole_units.checked_mul(pow10(decimals))?;

    if !frac.is_empty() {
        let frac_units = U256::from_str_radix(frac, 10).ok()?;
        let shifted = frac_units.checked_mul(pow10(decimals - frac.len() as u8))?;
        amount = amount.checked_add(shifted)?;
    }

    Some(amount)
}

/// Render a fixed-point integer as a decimal string, exactly.
///
/// Trailing fractional zeros are trimmed; a whole-number amount renders with
/// no separator. Display only — never feed the result back into arithmetic.
pub fn format_units(amount: U256, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }
    let scale = pow10(decimals);
    let whole = amount / scale;
    let frac = amount % scale;
    if frac.is_zero() {
        return whole.to_string();
    }
    let padded = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    format!("{}.{}", whole, padded.trim_end_matches('0'))
}

/// State of one amount input field.
///
/// `amount` is always derived from `(text, decimals)`; the only exception is
/// an accepted text too large for `U256`, where the last good amount is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountInput {
    text: String,
    decimals: u8,
    amount: U256,
}

impl AmountInput {
    /// Create an empty, untouched field at the given precision.
    pub fn new(decimals: u8) -> Self {
        Self {
            text: String::new(),
            decimals,
            amount: U256::ZERO,
        }
    }

    /// Apply a text edit. Invalid edits are silently dropped.
    pub fn set_text(&mut self, input: &str) {
        self.text = sanitize_amount_input(&self.text, input, self.decimals);
        if let Some(amount) = parse_units(&self.text, self.decimals) {
            self.amount = amount;
        }
    }

    /// Change the field's precision, re-clamping the existing text.
    pub fn set_decimals(&mut self, decimals: u8) {
        self.decimals = decimals;
        self.text = truncate_to_decimals(&self.text, decimals);
        if let Some(amount) = parse_units(&self.text, self.decimals) {
            self.amount = amount;
        }
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.text.clear();
        self.amount = U256::ZERO;
    }

    /// The current (sanitized) text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The precision in effect.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Exact fixed-point value of the current text.
    pub fn amount(&self) -> U256 {
        self.amount
    }

    /// True once the user has typed anything.
    pub fn is_touched(&self) -> bool {
        !self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_digits() {
        assert_eq!(sanitize_amount_input("", "123", 6), "123");
        assert_eq!(sanitize_amount_input("", "123.456789", 6), "123.456789");
    }

    #[test]
    fn test_rejects_malformed_input() {
        // Second separator, letters, sign - all keep the previous text
        assert_eq!(sanitize_amount_input("1.2", "1.2.3", 6), "1.2");
        assert_eq!(sanitize_amount_input("1.2", "1.2a", 6), "1.2");
        assert_eq!(sanitize_amount_input("", "-5", 6), "");
        assert_eq!(sanitize_amount_input("", " 5", 6), "");
    }

    #[test]
    fn test_normalizes_comma_separator() {
        assert_eq!(sanitize_amount_input("", "1,5", 6), "1.5");
        // Two commas is still two separators
        assert_eq!(sanitize_amount_input("7", "1,5,0", 6), "7");
    }

    #[test]
    fn test_truncates_excess_fraction() {
        assert_eq!(sanitize_amount_input("", "123.4567891", 6), "123.456789");
        assert_eq!(truncate_to_decimals("1.999", 2), "1.99");
    }

    #[test]
    fn test_truncation_is_idempotent() {
        for (text, decimals) in [
            ("123.4567891", 6u8),
            ("1.999", 2),
            ("0.1", 0),
            ("42", 18),
            ("5.", 3),
        ] {
            let once = truncate_to_decimals(text, decimals);
            assert_eq!(truncate_to_decimals(&once, decimals), once);
        }
    }

    #[test]
    fn test_bare_separator_is_editable() {
        // "." is accepted so the user can keep typing, and parses as zero
        assert_eq!(sanitize_amount_input("", ".", 6), ".");
        assert_eq!(parse_units(".", 6), Some(U256::ZERO));
    }

    #[test]
    fn test_parse_units_exact() {
        assert_eq!(parse_units("123.456789", 6), Some(U256::from(123_456_789u64)));
        assert_eq!(parse_units("1.5", 6), Some(U256::from(1_500_000u64)));
        assert_eq!(parse_units("2", 6), Some(U256::from(2_000_000u64)));
        assert_eq!(parse_units("", 6), Some(U256::ZERO));
        assert_eq!(parse_units("007", 0), Some(U256::from(7u64)));
    }

    #[test]
    fn test_parse_units_fails_closed() {
        // More fractional digits than the precision allows
        assert_eq!(parse_units("1.1234567", 6), None);
        assert_eq!(parse_units("1.2.3", 6), None);
        assert_eq!(parse_units("abc", 6), None);
    }

    #[test]
    fn test_format_units_exact() {
        assert_eq!(format_units(U256::from(123_456_789u64), 6), "123.456789");
        assert_eq!(format_units(U256::from(1_500_000u64), 6), "1.5");
        assert_eq!(format_units(U256::from(2_000_000u64), 6), "2");
        assert_eq!(format_units(U256::ZERO, 6), "0");
        // Sub-unit amounts keep their leading zeros
        assert_eq!(format_units(U256::from(42u64), 6), "0.000042");
        assert_eq!(format_units(U256::from(7u64), 0), "7");
    }

    #[test]
    fn test_parse_format_round_trip() {
        for text in ["123.456789", "0.000001", "1", "999999.5"] {
            let amount = parse_units(text, 6).unwrap();
            assert_eq!(parse_units(&format_units(amount, 6), 6), Some(amount));
        }
    }

    #[test]
    fn test_input_keystroke_flow() {
        let mut input = AmountInput::new(6);
        assert!(!input.is_touched());
        assert_eq!(input.amount(), U256::ZERO);

        input.set_text("123.456789");
        assert_eq!(input.text(), "123.456789");
        assert_eq!(input.amount(), U256::from(123_456_789u64));
        assert!(input.is_touched());

        // Extra fractional digit is clamped, value unchanged
        input.set_text("123.4567891");
        assert_eq!(input.text(), "123.456789");
        assert_eq!(input.amount(), U256::from(123_456_789u64));

        // Bad keystroke leaves everything as-is
        input.set_text("123.456789x");
        assert_eq!(input.text(), "123.456789");
    }

    #[test]
    fn test_precision_change_reclamps_text() {
        let mut input = AmountInput::new(6);
        input.set_text("1.123456");
        assert_eq!(input.amount(), U256::from(1_123_456u64));

        input.set_decimals(2);
        assert_eq!(input.text(), "1.12");
        assert_eq!(input.amount(), U256::from(112u64));
    }

    #[test]
    fn test_clear_resets_touched() {
        let mut input = AmountInput::new(18);
        input.set_text("5");
        input.clear();
        assert!(!input.is_touched());
        assert_eq!(input.text(), "");
        assert_eq!(input.amount(), U256::ZERO);
    }
}
