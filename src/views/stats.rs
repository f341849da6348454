use serde::Serialize;

use crate::entities::{Offer, Review};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ReviewStats {
    pub total: usize,
    pub average: f64,
    pub positive: usize,
}

impl ReviewStats {
    pub fn from_reviews(reviews: &[Review]) -> ReviewStats {
        if reviews.is_empty() {
            return ReviewStats::default();
        }
        let sum: f64 = reviews.iter().map(|review| review.rate).sum();
        let average = (sum / reviews.len() as f64 * 10.0).round() / 10.0;
        ReviewStats {
            total: reviews.len(),
            average,
            positive: reviews.iter().filter(|review| review.is_positive()).count(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct OfferStats {
    pub total: usize,
    pub active: usize,
}

impl OfferStats {
    pub fn from_offers(offers: &[Offer]) -> OfferStats {
        OfferStats {
            total: offers.len(),
            active: offers.iter().filter(|offer| offer.is_active).count(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub categories: usize,
    pub products: usize,
    pub active_offers: usize,
    pub reviews: ReviewStats,
}
