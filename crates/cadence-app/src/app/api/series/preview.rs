use salvo::{Depot, Request, Response, handler, http::StatusCode, writing::Json};

use super::types::{read_series_input, render_service_error};

/// ## Summary
/// POST /api/series/preview - Expand a series without storing anything
///
/// ## Errors
/// Returns HTTP 400 if the body is malformed, the base session or repeat
/// configuration is invalid, or the configured repeat limits are exceeded
#[handler]
pub async fn preview_series(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::debug!("Processing series preview request");

    let Some((base, repeat)) = read_series_input(req, depot, res).await else {
        return;
    };

    match cadence_service::series::preview(&base, &repeat) {
        Ok(preview) => {
            tracing::debug!(
                series_id = %preview.series_id,
                occurrences = preview.occurrences.len(),
                "Series previewed"
            );
            res.status_code(StatusCode::OK);
            res.render(Json(preview));
        }
        Err(e) => render_service_error(res, &e),
    }
}
