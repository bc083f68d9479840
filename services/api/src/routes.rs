use crate::infra::{device_from_headers, AppState};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use medimate::features::report::DocumentRenderer;
use medimate::features::{feature_router, ApiContext};

pub(crate) const SERVICE_NAME: &str = "MediMate";
pub(crate) const TAGLINE: &str = "Your Smart Health Companion";

pub(crate) fn with_feature_routes<R>(context: Arc<ApiContext<R>>) -> axum::Router
where
    R: DocumentRenderer + 'static,
{
    feature_router(context)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/home", axum::routing::get(home_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Landing payload: service identity plus the device class detected from
/// this request's User-Agent, so clients can pick a layout.
pub(crate) async fn home_endpoint(headers: HeaderMap) -> Json<serde_json::Value> {
    let device = device_from_headers(&headers);
    Json(json!({
        "service": SERVICE_NAME,
        "tagline": TAGLINE,
        "device": device.label(),
    }))
}
