use super::{TriageCategory, TriageVerdict};
use crate::features::Severity;

/// A single keyword rule. Every listed keyword must appear somewhere in
/// the normalized input for the rule to fire; matching is substring-based,
/// so "feverish" satisfies "fever".
#[derive(Debug, Clone)]
pub struct TriageRule {
    pub category: TriageCategory,
    pub severity: Severity,
    pub keywords: &'static [&'static str],
    pub advice: &'static str,
}

impl TriageRule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .all(|keyword| normalized.contains(keyword))
    }

    pub(crate) fn verdict(&self) -> TriageVerdict {
        TriageVerdict {
            category: self.category,
            severity: self.severity,
            advice: self.advice.to_string(),
        }
    }
}

/// The built-in rule table, in priority order. The first matching rule
/// wins; a fever+cough text that also mentions a headache still resolves
/// to the flu rule.
pub(crate) fn default_rules() -> Vec<TriageRule> {
    vec![
        TriageRule {
            category: TriageCategory::FluLike,
            severity: Severity::Warning,
            keywords: &["fever", "cough"],
            advice: "You may have the flu or COVID-19. Seek medical help.",
        },
        TriageRule {
            category: TriageCategory::Headache,
            severity: Severity::Info,
            keywords: &["headache"],
            advice: "Possible causes: stress, migraine, dehydration.",
        },
        TriageRule {
            category: TriageCategory::GiIssue,
            severity: Severity::Info,
            keywords: &["stomach"],
            advice: "Might be food-related. Stay hydrated.",
        },
    ]
}

/// Verdict returned when no rule matches, which also covers empty input.
pub(crate) fn fallback_verdict() -> TriageVerdict {
    TriageVerdict {
        category: TriageCategory::MildUnspecified,
        severity: Severity::Success,
        advice: "Mild symptoms detected. Rest and monitor.".to_string(),
    }
}

pub(crate) fn first_match<'rules>(
    rules: &'rules [TriageRule],
    normalized: &str,
) -> Option<&'rules TriageRule> {
    rules.iter().find(|rule| rule.matches(normalized))
}
