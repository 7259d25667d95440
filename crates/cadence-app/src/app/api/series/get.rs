use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};
use tracing::error;

use super::types::{render_error, render_service_error};
use crate::store_handler::get_store_from_depot;
use cadence_service::series::SeriesId;

/// ## Summary
/// GET `/api/series/{series_id}` - List every stored session of a series
///
/// ## Errors
/// Returns HTTP 404 if the series is unknown
/// Returns HTTP 500 if the session store is unavailable
#[handler]
pub async fn get_series(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    let Some(series_id) = req.param::<String>("series_id").map(SeriesId::new) else {
        render_error(
            res,
            StatusCode::BAD_REQUEST,
            "invalid_path",
            "Series ID required",
        );
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

    match store.series_sessions(&series_id).await {
        Ok(sessions) => {
            res.status_code(StatusCode::OK);
            res.render(Json(sessions));
        }
        Err(e) => render_service_error(res, &e),
    }
}
