//! User-facing workflows: symptom triage, BMI evaluation, and health
//! reports, plus the axum router exposing them to the presentation shell.

pub mod bmi;
pub mod report;
pub mod router;
pub mod triage;

#[cfg(test)]
mod tests;

pub use router::{feature_router, ApiContext};

use serde::{Deserialize, Serialize};

/// Display channel attached to a result, mirroring how the companion UI
/// styles its feedback banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}
