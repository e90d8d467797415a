use serde::{Deserialize, Serialize};

use crate::offer::Offer;

/// List price an offer must beat to count as over-list. Fixed by the
/// business; not runtime-configurable.
pub const OVER_LIST_PRICE: f64 = 500_000.0;

/// Aggregate figures over every stored offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferStatistics {
    pub num_offers: i64,
    pub num_cash_offers: i64,
    pub num_over_list: i64,
    pub avg_closing_time: f64,
    pub num_invalid_offers: i64,
}

/// Compute statistics in a single pass. Only valid offers feed the counts
/// and the closing-time average; invalid ones are tallied separately.
/// Nothing is cached; callers recompute on every request.
pub fn aggregate(offers: &[Offer]) -> OfferStatistics {
    let mut stats = OfferStatistics::default();
    let mut closing_days: i64 = 0;

    for offer in offers {
        if !offer.is_valid {
            stats.num_invalid_offers += 1;
            continue;
        }
        stats.num_offers += 1;
        if offer.is_cash {
            stats.num_cash_offers += 1;
        }
        if offer.offer_amount > OVER_LIST_PRICE {
            stats.num_over_list += 1;
        }
        closing_days += offer.closing_time;
    }

    if stats.num_offers > 0 {
        stats.avg_closing_time = closing_days as f64 / stats.num_offers as f64;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::OfferSubmission;
    use uuid::Uuid;

    fn offer(offer_amount: f64, is_cash: bool, closing_time: i64) -> Offer {
        OfferSubmission {
            realtor_name: "A".to_string(),
            offer_amount,
            is_cash,
            contingencies: "none".to_string(),
            closing_time,
        }
        .into_offer(Uuid::new_v4())
    }

    #[test]
    fn test_empty_set_is_all_zero() {
        let stats = aggregate(&[]);
        assert_eq!(stats, OfferStatistics::default());
        assert_eq!(stats.avg_closing_time, 0.0);
    }

    #[test]
    fn test_single_cash_offer_over_list() {
        let stats = aggregate(&[offer(600_000.0, true, 30)]);
        assert_eq!(stats.num_offers, 1);
        assert_eq!(stats.num_cash_offers, 1);
        assert_eq!(stats.num_over_list, 1);
        assert_eq!(stats.avg_closing_time, 30.0);
        assert_eq!(stats.num_invalid_offers, 0);
    }

    #[test]
    fn test_invalid_offers_tallied_separately() {
        let stats = aggregate(&[offer(-5.0, true, 10), offer(100_000.0, false, 20)]);
        assert_eq!(stats.num_offers, 1);
        assert_eq!(stats.num_invalid_offers, 1);
        // Invalid offers contribute to no other figure.
        assert_eq!(stats.num_cash_offers, 0);
        assert_eq!(stats.avg_closing_time, 20.0);
    }

    #[test]
    fn test_over_list_excludes_exact_list_price() {
        let stats = aggregate(&[offer(OVER_LIST_PRICE, false, 30)]);
        assert_eq!(stats.num_over_list, 0);
    }

    #[test]
    fn test_average_over_valid_offers_only() {
        let offers = vec![
            offer(300_000.0, false, 10),
            offer(400_000.0, true, 30),
            offer(0.0, true, 1000),
        ];
        let stats = aggregate(&offers);
        assert_eq!(stats.num_offers, 2);
        assert_eq!(stats.avg_closing_time, 20.0);
    }
}
