use async_trait::async_trait;
use uuid::Uuid;

use crate::offer::{Offer, OfferSubmission};

/// A storage operation could not complete. The message is for logs; callers
/// surface an opaque error to clients.
#[derive(Debug, thiserror::Error)]
#[error("persistence failure: {0}")]
pub struct PersistenceError(pub String);

/// Repository trait for offer storage.
#[async_trait]
pub trait OfferStore: Send + Sync {
    /// Persist a new offer and return its assigned id. The write must be
    /// atomic: a failed create leaves no partial record behind.
    async fn create(&self, submission: OfferSubmission) -> Result<Uuid, PersistenceError>;

    /// Every stored offer, valid and invalid alike, in no guaranteed order.
    async fn list_all(&self) -> Result<Vec<Offer>, PersistenceError>;
}
