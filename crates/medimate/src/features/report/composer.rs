use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Title line every rendered report opens with.
pub const REPORT_TITLE: &str = "MediMate - Health Report";

/// Upper bound on the accepted patient age, matching the intake form.
pub const MAX_AGE: u8 = 120;

/// User-supplied fields for one report. Consumed by a single render call;
/// nothing is retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub name: String,
    pub age: u8,
    pub notes: String,
    pub date: NaiveDate,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("age {0} is outside the accepted range 0..={MAX_AGE}")]
    AgeOutOfRange(u8),
}

/// Structured document handed to the rendering backend: a title plus the
/// body lines in their final order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub title: String,
    pub body: Vec<String>,
}

impl ReportDocument {
    /// Full line sequence in render order, title first.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.body.len() + 1);
        lines.push(self.title.clone());
        lines.extend(self.body.iter().cloned());
        lines
    }
}

/// Assemble the fixed field sequence for a health report: title, name,
/// age, ISO date, a separating blank line, then the notes block. Name and
/// notes may be empty; the age must fall within `0..=MAX_AGE`.
pub fn compose(request: &ReportRequest) -> Result<ReportDocument, ReportError> {
    if request.age > MAX_AGE {
        return Err(ReportError::AgeOutOfRange(request.age));
    }

    let body = vec![
        format!("Name: {}", request.name),
        format!("Age: {}", request.age),
        format!("Date: {}", request.date.format("%Y-%m-%d")),
        String::new(),
        format!("Notes: {}", request.notes),
    ];

    Ok(ReportDocument {
        title: REPORT_TITLE.to_string(),
        body,
    })
}
