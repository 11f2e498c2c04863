use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use axum::http::HeaderValue;
use cheru_avm::config::{AppConfig, ReferenceConfig, ServerConfig};
use cheru_avm::estimate::EstimateService;
use cheru_avm::reference::{CatalogError, ReferenceCatalog};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Seeded catalog with any configured CSV exports layered on top.
pub(crate) fn build_catalog(reference: &ReferenceConfig) -> Result<ReferenceCatalog, CatalogError> {
    let mut catalog = ReferenceCatalog::seeded();

    if let Some(path) = &reference.areas_csv {
        let loaded = catalog.load_areas_file(path)?;
        info!(path = %path.display(), loaded, "loaded area pricing");
    }
    if let Some(path) = &reference.amenities_csv {
        let loaded = catalog.load_amenities_file(path)?;
        info!(path = %path.display(), loaded, "loaded amenity uplifts");
    }

    Ok(catalog)
}

pub(crate) fn estimate_service(
    config: &AppConfig,
) -> Result<EstimateService<ReferenceCatalog>, CatalogError> {
    let catalog = build_catalog(&config.reference)?;
    Ok(EstimateService::new(
        Arc::new(catalog),
        config.valuation,
        config.validation,
    ))
}

pub(crate) fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if server.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring malformed CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
