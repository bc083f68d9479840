use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::bmi::{self, BmiInput, BmiReading, WeightClass};
use super::report::{DocumentRenderer, ReportRequest, ReportService, ReportServiceError};
use super::triage::{TriageEngine, TriageVerdict};
use super::Severity;

/// Shared state behind the feature endpoints: the triage rule engine and
/// the report service with its rendering backend.
pub struct ApiContext<R> {
    pub triage: TriageEngine,
    pub reports: ReportService<R>,
}

/// Router builder exposing the three core entry points.
pub fn feature_router<R>(context: Arc<ApiContext<R>>) -> Router
where
    R: DocumentRenderer + 'static,
{
    Router::new()
        .route("/api/v1/triage", post(triage_handler::<R>))
        .route("/api/v1/bmi", post(bmi_handler::<R>))
        .route("/api/v1/report", post(report_handler::<R>))
        .with_state(context)
}

#[derive(Debug, Deserialize)]
pub(crate) struct TriageApiRequest {
    symptoms: String,
}

pub(crate) async fn triage_handler<R>(
    State(context): State<Arc<ApiContext<R>>>,
    Json(request): Json<TriageApiRequest>,
) -> Json<TriageVerdict>
where
    R: DocumentRenderer + 'static,
{
    Json(context.triage.classify(&request.symptoms))
}

#[derive(Debug, Serialize)]
pub(crate) struct BmiApiResponse {
    bmi: f64,
    formatted: String,
    class: WeightClass,
    class_label: &'static str,
    severity: Severity,
}

impl From<BmiReading> for BmiApiResponse {
    fn from(reading: BmiReading) -> Self {
        Self {
            bmi: reading.rounded(),
            formatted: reading.formatted(),
            class: reading.class,
            class_label: reading.class.label(),
            severity: reading.class.severity(),
        }
    }
}

pub(crate) async fn bmi_handler<R>(
    State(_context): State<Arc<ApiContext<R>>>,
    Json(input): Json<BmiInput>,
) -> Response
where
    R: DocumentRenderer + 'static,
{
    match bmi::evaluate(input) {
        Ok(reading) => (StatusCode::OK, Json(BmiApiResponse::from(reading))).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReportApiRequest {
    #[serde(default)]
    name: String,
    age: u8,
    #[serde(default)]
    notes: String,
    #[serde(default)]
    date: Option<NaiveDate>,
}

pub(crate) async fn report_handler<R>(
    State(context): State<Arc<ApiContext<R>>>,
    Json(request): Json<ReportApiRequest>,
) -> Response
where
    R: DocumentRenderer + 'static,
{
    let date = request.date.unwrap_or_else(|| Local::now().date_naive());
    let report_request = ReportRequest {
        name: request.name,
        age: request.age,
        notes: request.notes,
        date,
    };

    match context.reports.generate(&report_request) {
        Ok(generated) => {
            let payload = json!({
                "path": generated.artifact.path,
                "lines": generated.document.lines(),
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(ReportServiceError::Compose(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
        Err(ReportServiceError::Render(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
