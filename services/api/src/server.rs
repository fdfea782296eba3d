use crate::cli::ServeArgs;
use crate::infra::{seed_drivers, AppState, InMemoryDriverRepository};
use crate::routes::with_driver_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fleet_admin::config::AppConfig;
use fleet_admin::drivers::DriverAdminService;
use fleet_admin::error::AppError;
use fleet_admin::telemetry;
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

    let seed = seed_drivers();
    let seeded = seed.len();
    let repository = Arc::new(InMemoryDriverRepository::seeded(seed));
    let driver_service = Arc::new(DriverAdminService::new(
        repository,
        config.drivers.clone(),
    ));

    let app = with_driver_routes(driver_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        page_size = config.drivers.page_size,
        seeded_drivers = seeded,
        "fleet admin ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
