use crate::cli::ServeArgs;
use crate::infra::{cors_layer, estimate_service, AppState};
use crate::routes::with_estimate_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use cheru_avm::config::AppConfig;
use cheru_avm::error::AppError;
use cheru_avm::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(estimate_service(&config)?);
    info!(
        depreciation = service.engine().config().depreciation.label(),
        amenities = service.engine().config().amenities.label(),
        "valuation engine configured"
    );

    let app = with_estimate_routes(service)
        .layer(Extension(app_state))
        .layer(cors_layer(&config.server))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "valuation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
