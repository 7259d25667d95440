use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use cadence_core::error::CoreError;
use cadence_service::store::SessionStore;

pub struct SessionStoreHandler {
    pub store: Arc<dyn SessionStore>,
}

#[async_trait]
impl salvo::Handler for SessionStoreHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // Every request shares the same store instance
        depot.inject(Arc::clone(&self.store));
    }
}

/// ## Summary
/// Retrieves the session store from the depot.
///
/// ## Errors
/// Returns an error if the session store is not found in the depot.
pub fn get_store_from_depot(depot: &salvo::Depot) -> AppResult<Arc<dyn SessionStore>> {
    depot
        .obtain::<Arc<dyn SessionStore>>()
        .cloned()
        .map_err(|_err| CoreError::MissingState("Session store not found in depot").into())
}
