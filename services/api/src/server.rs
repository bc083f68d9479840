use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_feature_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use medimate::config::AppConfig;
use medimate::error::AppError;
use medimate::features::report::{FileRenderer, ReportService};
use medimate::features::triage::TriageEngine;
use medimate::features::ApiContext;
use medimate::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(config.environment, &config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let renderer = Arc::new(FileRenderer::from_config(&config.report));
    let context = Arc::new(ApiContext {
        triage: TriageEngine::with_default_rules(),
        reports: ReportService::new(renderer),
    });

    let app = with_feature_routes(context)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "medimate health companion ready");

    axum::serve(listener, app).await?;
    Ok(())
}
