use salvo::Router;

use cadence_core::constants::{SERIES_PREVIEW_ROUTE_COMPONENT, SERIES_ROUTE_COMPONENT};

mod cancel;
mod create;
mod get;
mod preview;
mod types;


#[must_use]
pub fn routes() -> Router {
    Router::with_path(SERIES_ROUTE_COMPONENT)
        .post(create::create_series)
        .push(Router::with_path(SERIES_PREVIEW_ROUTE_COMPONENT).post(preview::preview_series))
        .push(
            Router::with_path("{series_id}")
                .get(get::get_series)
                .delete(cancel::cancel_series),
        )
}
