use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skillscope::config::AppConfig;
use skillscope::error::AppError;
use skillscope::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

use crate::cli::ServeArgs;
use crate::infra::{self, AppState};
use crate::routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    // The dataset cache is populated exactly once, before the server accepts
    // traffic. Any category failing to load aborts startup.
    let dataset = infra::load_dataset(&config).await?;
    info!(records = dataset.total_records(), "skill dataset cache ready");

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        dataset: Arc::new(dataset),
    };

    let app = routes::router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "skill analytics service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
