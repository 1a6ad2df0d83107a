//! # Input Sanitizer
//! Live correction of raw score text, applied on every change to a field.
//!
//! The sanitizer is pure text → text so it can be unit tested: the page
//! adapter is responsible for writing the corrected text back into the
//! visible field. It never fails; worst case it returns the input
//! uncorrected.

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that may legally appear while typing a score: digits plus
/// either decimal separator.
static INVALID_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9,.]").expect("invalid-chars regex"));

/// Replace a decimal comma with a decimal point so `1,5` and `1.5` parse
/// the same. Normalization for parsing only; callers keep the user's
/// original separator on screen.
pub fn normalize_decimal(text: &str) -> String {
    text.replace(',', ".")
}

/// Strict numeric parse shared by the sanitizer and the evaluator.
///
/// Only finite values count: `inf`/`NaN` spellings are rejected along with
/// malformed numerals like `3.4.5`, so a parse failure is always a
/// distinguishable marker rather than a sentinel value.
pub fn parse_score(text: &str) -> Option<f64> {
    match normalize_decimal(text).trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Correct one field's raw text. Rules, in order:
///
/// 1. A lone `-` is left alone so the user can start typing a negative
///    number without premature rejection (it is still rejected on
///    evaluation).
/// 2. If the text does not parse as a number, strip every character that
///    is not a digit, comma, or period.
/// 3. Negative values clamp to `"0"`, values above 5 clamp to `"5"`,
///    anything else is returned unchanged.
///
/// Idempotent: sanitizing already-sanitized text is a no-op.
pub fn sanitize(raw: &str) -> String {
    if raw.trim() == "-" {
        return raw.to_string();
    }

    match parse_score(raw) {
        None => INVALID_CHARS.replace_all(raw, "").into_owned(),
        Some(v) if v < 0.0 => "0".to_string(),
        Some(v) if v > 5.0 => "5".to_string(),
        Some(_) => raw.to_string(),
    }
}
