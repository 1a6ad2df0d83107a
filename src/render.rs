//! # Result Rendering
//! The display-adapter table: maps each outcome tag to user-facing text
//! and a style class. Required scores are shown rounded to two decimals;
//! an already-secured pass always reads exactly "0.00".

use serde::Serialize;

use crate::engine::round2;
use crate::outcome::{Outcome, Style};

/// User-facing rendition of an outcome, ready for the result panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub style: Style,
    pub message: String,
    /// Formatted required score, when the outcome carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
}

/// Two-decimal display form of a required score.
fn fmt2(value: f64) -> String {
    format!("{:.2}", round2(value))
}

/// Map an outcome to its style and message.
pub fn render(outcome: &Outcome) -> Rendered {
    match outcome {
        Outcome::MissingInput => Rendered {
            style: Style::Error,
            message: "Please enter the scores for the first two components.".to_string(),
            required: None,
        },
        Outcome::InvalidFormat { lone_sign: true } => Rendered {
            style: Style::Error,
            message: "A lone sign is not a valid number. Please enter a score between 0 and 5."
                .to_string(),
            required: None,
        },
        Outcome::InvalidFormat { lone_sign: false } => Rendered {
            style: Style::Error,
            message: "Invalid number format. Check the scores entered (example: '3.4')."
                .to_string(),
            required: None,
        },
        Outcome::OutOfRange => Rendered {
            style: Style::Error,
            message: "Scores must be between 0 and 5.".to_string(),
            required: None,
        },
        Outcome::Impossible { required } => {
            let r = fmt2(*required);
            Rendered {
                style: Style::Error,
                message: format!("You would need {r} on the final component. Passing is impossible."),
                required: Some(r),
            }
        }
        Outcome::AlreadyPassed => Rendered {
            style: Style::Success,
            message: "Congratulations! You have already passed. You need 0.00.".to_string(),
            required: Some("0.00".to_string()),
        },
        Outcome::Achievable { required } => {
            let r = fmt2(*required);
            Rendered {
                style: Style::Info,
                message: format!("To pass, you need {r} on the final component."),
                required: Some(r),
            }
        }
    }
}
