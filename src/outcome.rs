//! # Evaluation Outcome
//! Tagged result taxonomy for one evaluation request.
//!
//! Every failure mode is a value here, never an error: malformed input
//! degrades to a displayed message, so the evaluator stays total. An
//! `Outcome` is created fresh per request, rendered, and discarded.

use serde::{Deserialize, Serialize};

/// Result of evaluating two raw component-score texts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// At least one field was empty after trimming.
    MissingInput,
    /// A field did not parse as a number. `lone_sign` marks the special
    /// case of a field holding exactly `-`, which gets its own message.
    InvalidFormat { lone_sign: bool },
    /// Both fields parsed but at least one is outside `[0, 5]`.
    OutOfRange,
    /// The required third score exceeds the 0–5 scale; passing is off the
    /// table. Carries the raw (unrounded) required score.
    Impossible { required: f64 },
    /// The required third score is zero or negative; displayed as 0.00.
    AlreadyPassed,
    /// The required third score is reachable. Carries the raw value.
    Achievable { required: f64 },
}

/// Presentation class the page applies to the result panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Error,
    Success,
    Info,
}

impl Outcome {
    /// Style classification per the display table: only a pass-in-reach
    /// outcome is informational, only an already-secured pass is a success.
    pub fn style(&self) -> Style {
        match self {
            Outcome::AlreadyPassed => Style::Success,
            Outcome::Achievable { .. } => Style::Info,
            Outcome::MissingInput
            | Outcome::InvalidFormat { .. }
            | Outcome::OutOfRange
            | Outcome::Impossible { .. } => Style::Error,
        }
    }
}
