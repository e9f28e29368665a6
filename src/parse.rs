// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Lenient numeric parsing for form fields.
//!
//! Users type into these fields under time pressure, so nothing here ever
//! fails: the longest leading decimal literal is taken (`"12.5 gal"` reads
//! as 12.5) and anything without digits reads as zero.

/// Parse a form value, treating anything unparseable as `0.0`.
pub fn parse_amount(raw: &str) -> f64 {
    parse_optional(raw).unwrap_or(0.0)
}

/// Parse a form value, returning `None` when no finite number can be read.
pub fn parse_optional(raw: &str) -> Option<f64> {
    let literal = leading_literal(raw.trim_start());
    if literal.is_empty() {
        return None;
    }
    let value: f64 = literal.parse().ok()?;
    if value.is_finite() {
        Some(value)
    } else {
        tracing::warn!(raw, "non-finite amount normalized to zero");
        None
    }
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`.
fn leading_literal(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when it carries at least one digit ("3e" is 3).
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}
