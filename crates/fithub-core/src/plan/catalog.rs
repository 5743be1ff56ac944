//! The fixed plan catalog shown on the plan selection step.

use super::model::{DEFAULT_BASE_PRICE_PER_MONTH, discount_rate_for};

/// A plan card: one duration with its headline prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanOffer {
    pub duration_months: u32,
    pub name: &'static str,
    pub base_price_per_month: f64,
}

impl PlanOffer {
    pub fn discount_rate(&self) -> f64 {
        discount_rate_for(self.duration_months)
    }

    pub fn total_before_discount(&self) -> f64 {
        self.base_price_per_month * f64::from(self.duration_months)
    }

    pub fn total_after_discount(&self) -> f64 {
        self.total_before_discount() * (1.0 - self.discount_rate())
    }

    pub fn savings(&self) -> f64 {
        self.total_before_discount() - self.total_after_discount()
    }
}

pub const PLAN_CATALOG: [PlanOffer; 4] = [
    PlanOffer {
        duration_months: 1,
        name: "1 Month",
        base_price_per_month: DEFAULT_BASE_PRICE_PER_MONTH,
    },
    PlanOffer {
        duration_months: 3,
        name: "3 Months",
        base_price_per_month: DEFAULT_BASE_PRICE_PER_MONTH,
    },
    PlanOffer {
        duration_months: 6,
        name: "6 Months",
        base_price_per_month: DEFAULT_BASE_PRICE_PER_MONTH,
    },
    PlanOffer {
        duration_months: 12,
        name: "12 Months",
        base_price_per_month: DEFAULT_BASE_PRICE_PER_MONTH,
    },
];

/// Looks up the catalog entry for a duration.
pub fn find_plan_offer(duration_months: u32) -> Option<&'static PlanOffer> {
    PLAN_CATALOG
        .iter()
        .find(|offer| offer.duration_months == duration_months)
}
