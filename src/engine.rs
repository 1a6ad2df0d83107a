//! # Grade Evaluator
//! Pure, testable logic that maps two raw field texts → `Outcome`.
//! No I/O, same logic as the `/evaluate` handler; suitable for unit tests.
//!
//! The checks run in a fixed order and short-circuit on the first match:
//! missing input, lone sign, parse failure, range, then the formula.

use crate::outcome::Outcome;
use crate::sanitize::parse_score;
use crate::scheme::GradingScheme;

/// Evaluate with the default scheme (33/33/34, passing average 3.0).
pub fn evaluate(first: &str, second: &str) -> Outcome {
    evaluate_with_scheme(first, second, &GradingScheme::default())
}

/// Evaluate two raw component-score texts against a scheme.
///
/// Total: every input, however malformed, maps to exactly one `Outcome`.
pub fn evaluate_with_scheme(first: &str, second: &str, scheme: &GradingScheme) -> Outcome {
    let a = first.trim();
    let b = second.trim();

    if a.is_empty() || b.is_empty() {
        return Outcome::MissingInput;
    }

    // A lone sign is caught before the numeric parse so it gets its own
    // message instead of the generic format error.
    if a == "-" || b == "-" {
        return Outcome::InvalidFormat { lone_sign: true };
    }

    let (first, second) = match (parse_score(a), parse_score(b)) {
        (Some(x), Some(y)) => (x, y),
        _ => return Outcome::InvalidFormat { lone_sign: false },
    };

    if !(0.0..=5.0).contains(&first) || !(0.0..=5.0).contains(&second) {
        return Outcome::OutOfRange;
    }

    let required = (scheme.passing_average
        - first * scheme.weight_first
        - second * scheme.weight_second)
        / scheme.weight_third;

    if required > 5.0 {
        Outcome::Impossible { required }
    } else if required <= 0.0 {
        Outcome::AlreadyPassed
    } else {
        Outcome::Achievable { required }
    }
}

/// Round to two decimals, half away from zero.
///
/// Display rounding rule for required scores. `f64::round` ties away from
/// zero, which is the documented choice for `.xx5` boundaries.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
