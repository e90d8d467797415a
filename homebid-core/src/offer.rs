use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchase offer as stored, valid or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: Uuid,
    pub realtor_name: String,
    pub offer_amount: f64,
    pub is_cash: bool,
    pub contingencies: String,
    /// Days until the proposed close.
    pub closing_time: i64,
    /// Stamped once at submission time; never recomputed afterwards.
    pub is_valid: bool,
}

/// The caller-supplied fields of an offer, before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferSubmission {
    pub realtor_name: String,
    pub offer_amount: f64,
    pub is_cash: bool,
    pub contingencies: String,
    pub closing_time: i64,
}

impl OfferSubmission {
    /// Sanity rule applied at submission: the bid and the closing duration
    /// must both be positive. A failing offer is still stored; this is a
    /// classification, not a rejection.
    pub fn is_valid(&self) -> bool {
        !(self.offer_amount <= 0.0 || self.closing_time <= 0)
    }

    /// Freeze the submission into a stored record under the given id.
    pub fn into_offer(self, id: Uuid) -> Offer {
        let is_valid = self.is_valid();
        Offer {
            id,
            realtor_name: self.realtor_name,
            offer_amount: self.offer_amount,
            is_cash: self.is_cash,
            contingencies: self.contingencies,
            closing_time: self.closing_time,
            is_valid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(offer_amount: f64, closing_time: i64) -> OfferSubmission {
        OfferSubmission {
            realtor_name: "A".to_string(),
            offer_amount,
            is_cash: false,
            contingencies: "none".to_string(),
            closing_time,
        }
    }

    #[test]
    fn test_positive_amount_and_closing_is_valid() {
        assert!(submission(600_000.0, 30).is_valid());
        assert!(submission(0.01, 1).is_valid());
    }

    #[test]
    fn test_non_positive_amount_is_invalid() {
        assert!(!submission(0.0, 30).is_valid());
        assert!(!submission(-5.0, 10).is_valid());
    }

    #[test]
    fn test_non_positive_closing_is_invalid() {
        assert!(!submission(600_000.0, 0).is_valid());
        assert!(!submission(600_000.0, -7).is_valid());
    }

    #[test]
    fn test_into_offer_stamps_validity() {
        let id = Uuid::new_v4();
        let offer = submission(-5.0, 10).into_offer(id);
        assert_eq!(offer.id, id);
        assert!(!offer.is_valid);

        let offer = submission(100.0, 10).into_offer(Uuid::new_v4());
        assert!(offer.is_valid);
    }
}
