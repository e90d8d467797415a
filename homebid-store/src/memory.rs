use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use homebid_core::offer::{Offer, OfferSubmission};
use homebid_core::repository::{OfferStore, PersistenceError};

/// In-memory offer store. Lets handlers run against a plain Vec instead of
/// a live database; same append-only contract as the Postgres store.
#[derive(Default)]
pub struct MemoryOfferStore {
    offers: RwLock<Vec<Offer>>,
}

impl MemoryOfferStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OfferStore for MemoryOfferStore {
    async fn create(&self, submission: OfferSubmission) -> Result<Uuid, PersistenceError> {
        let offer = submission.into_offer(Uuid::new_v4());
        let id = offer.id;
        self.offers.write().await.push(offer);
        Ok(id)
    }

    async fn list_all(&self) -> Result<Vec<Offer>, PersistenceError> {
        Ok(self.offers.read().await.clone())
    }
}
