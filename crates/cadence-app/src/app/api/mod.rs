mod app_specific;
mod series;

use salvo::Router;

// Re-export route constants from core
pub use cadence_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, APP_ROUTE_PREFIX, SERIES_PREVIEW_ROUTE,
    SERIES_ROUTE_COMPONENT, SERIES_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the main API router with all handlers.
///
/// ## Errors
/// Returns an error if any child route handler fails to initialize.
pub fn routes() -> anyhow::Result<Router> {
    Ok(Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(series::routes()))
}
