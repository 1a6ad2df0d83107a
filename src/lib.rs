// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod engine;
pub mod outcome;
pub mod render;
pub mod sanitize;
pub mod scheme;

// ---- Re-exports for stable public API ----
pub use crate::api::{router, AppState};
pub use crate::engine::{evaluate, evaluate_with_scheme};
pub use crate::outcome::{Outcome, Style};
pub use crate::sanitize::sanitize;
pub use crate::scheme::GradingScheme;
