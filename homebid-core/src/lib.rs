pub mod offer;
pub mod repository;
pub mod stats;

pub use offer::{Offer, OfferSubmission};
pub use repository::{OfferStore, PersistenceError};
pub use stats::{aggregate, OfferStatistics};
