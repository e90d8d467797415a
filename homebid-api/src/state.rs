use std::sync::Arc;

use homebid_core::repository::OfferStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn OfferStore>,
}
