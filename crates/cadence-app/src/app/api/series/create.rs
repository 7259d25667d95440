use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};
use tracing::error;

use super::types::{read_series_input, render_error, render_service_error};
use crate::store_handler::get_store_from_depot;
use cadence_service::series::submit::submit_series;

/// ## Summary
/// POST /api/series - Store a base session and its expanded occurrences
///
/// Occurrences refused by the store are listed under `failed`; the others
/// stay stored.
///
/// ## Side Effects
/// - Creates the base session
/// - Creates one session per expanded occurrence
///
/// ## Errors
/// Returns HTTP 400 if the input is invalid
/// Returns HTTP 409 if the store reports a conflict for the base session
/// Returns HTTP 500 if the session store is unavailable
#[handler]
pub async fn create_series(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing create series request");

    let Some((base, repeat)) = read_series_input(req, depot, res).await else {
        return;
    };

    let store = match get_store_from_depot(depot) {
        Ok(store) => store,
        Err(e) => {
            error!(error = ?e, "Failed to get session store");
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "Internal server error",
            );
            return;
        }
    };

    match submit_series(store.as_ref(), &base, &repeat).await {
        Ok(submission) => {
            tracing::info!(
                series_id = %submission.series_id,
                created = submission.created.len(),
                failed = submission.failed.len(),
                "Series created"
            );
            res.status_code(StatusCode::CREATED);
            res.render(Json(submission));
        }
        Err(e) => render_service_error(res, &e),
    }
}
