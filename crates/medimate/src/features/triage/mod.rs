mod rules;

pub use rules::TriageRule;

use crate::features::Severity;
use serde::{Deserialize, Serialize};

/// Advisory category produced by the symptom triager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageCategory {
    FluLike,
    Headache,
    GiIssue,
    MildUnspecified,
}

impl TriageCategory {
    pub fn label(self) -> &'static str {
        match self {
            TriageCategory::FluLike => "possible flu or COVID-19",
            TriageCategory::Headache => "headache",
            TriageCategory::GiIssue => "digestive complaint",
            TriageCategory::MildUnspecified => "mild symptoms",
        }
    }
}

/// Advisory outcome: the matched category, its display channel, and the
/// human-readable guidance shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageVerdict {
    pub category: TriageCategory,
    pub severity: Severity,
    pub advice: String,
}

/// Stateless engine evaluating keyword rules in priority order.
pub struct TriageEngine {
    rules: Vec<TriageRule>,
}

impl TriageEngine {
    pub fn new(rules: Vec<TriageRule>) -> Self {
        Self { rules }
    }

    pub fn with_default_rules() -> Self {
        Self::new(rules::default_rules())
    }

    /// Classify free-form symptom text. Total over every input: anything
    /// no rule matches, including the empty string, gets the fallback
    /// verdict.
    pub fn classify(&self, symptoms: &str) -> TriageVerdict {
        let normalized = symptoms.to_lowercase();
        match rules::first_match(&self.rules, &normalized) {
            Some(rule) => rule.verdict(),
            None => rules::fallback_verdict(),
        }
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
