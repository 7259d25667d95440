use salvo::{Depot, Request, Response, http::StatusCode, writing::Json};
use serde::Serialize;
use tracing::error;

use crate::config::get_config_from_depot;
use cadence_service::error::ServiceError;
use cadence_service::series::input::SeriesInput;
use cadence_service::series::{BaseSession, RepeatConfig, SeriesId};

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

/// ## Summary
/// Cancel series response payload
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelResponse {
    pub series_id: SeriesId,
    pub cancelled: usize,
}

pub fn render_error(res: &mut Response, status: StatusCode, kind: &'static str, message: &str) {
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: message.to_string(),
        kind,
    }));
}

/// ## Summary
/// Renders a service error with the matching HTTP status.
pub fn render_service_error(res: &mut Response, err: &ServiceError) {
    let status = match err {
        ServiceError::InvalidBaseSession(_)
        | ServiceError::InvalidRepeatConfig(_)
        | ServiceError::InvalidPattern { .. } => StatusCode::BAD_REQUEST,
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Conflict(_) => StatusCode::CONFLICT,
    };
    render_error(res, status, err.kind(), &err.to_string());
}

/// ## Summary
/// Reads a `{ base, repeat }` body, validates it and applies the configured
/// repeat limits.
///
/// Returns `None` after rendering an error response if any step fails.
pub async fn read_series_input(
    req: &mut Request,
    depot: &Depot,
    res: &mut Response,
) -> Option<(BaseSession, RepeatConfig)> {
    let input: SeriesInput = match req.parse_json().await {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to parse series request");
            render_error(
                res,
                StatusCode::BAD_REQUEST,
                "invalid_body",
                "Invalid request body",
            );
            return None;
        }
    };

    let (base, repeat) = match input.into_parts() {
        Ok(parts) => parts,
        Err(e) => {
            render_service_error(res, &e);
            return None;
        }
    };

    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = ?e, "Failed to get configuration");
            render_error(
                res,
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "Internal server error",
            );
            return None;
        }
    };

    if repeat.enabled
        && let Err(e) = settings
            .series
            .check_limits(repeat.weeks, repeat.patterns.len())
    {
        tracing::debug!(error = %e, "Repeat request exceeds configured limits");
        render_service_error(res, &ServiceError::InvalidRepeatConfig(e.to_string()));
        return None;
    }

    Some((base, repeat))
}
