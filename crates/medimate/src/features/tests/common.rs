use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;
use tempfile::TempDir;

use crate::features::report::{FileRenderer, ReportRequest, ReportService};
use crate::features::router::ApiContext;
use crate::features::triage::TriageEngine;
use crate::features::feature_router;

pub(super) const TEST_REPORT_FILE: &str = "medimate_report.txt";

pub(super) fn report_request(name: &str, age: u8, notes: &str) -> ReportRequest {
    ReportRequest {
        name: name.to_string(),
        age,
        notes: notes.to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
    }
}

pub(super) fn report_service(dir: &TempDir) -> ReportService<FileRenderer> {
    ReportService::new(Arc::new(FileRenderer::new(dir.path(), TEST_REPORT_FILE)))
}

/// Feature router backed by a throwaway report directory. The TempDir is
/// returned so the artifact survives until the test finishes.
pub(super) fn router_with_temp_reports() -> (Router, TempDir) {
    let dir = TempDir::new().expect("temp dir");
    let context = Arc::new(ApiContext {
        triage: TriageEngine::with_default_rules(),
        reports: report_service(&dir),
    });
    (feature_router(context), dir)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
