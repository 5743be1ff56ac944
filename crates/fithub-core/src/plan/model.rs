//! Plan domain model.

use serde::{Deserialize, Serialize};

/// Monthly base price applied when nothing else is configured.
pub const DEFAULT_BASE_PRICE_PER_MONTH: f64 = 50.0;

/// Durations (in months) offered by the plan catalog.
pub const SUPPORTED_DURATIONS: [u32; 4] = [1, 3, 6, 12];

/// Returns the discount rate for a plan duration.
///
/// Durations outside the catalog are accepted with no discount.
pub fn discount_rate_for(duration_months: u32) -> f64 {
    match duration_months {
        3 => 0.05,
        6 => 0.10,
        12 => 0.15,
        _ => 0.0,
    }
}

/// The plan part of a selection.
///
/// Fields are private so that `discount_rate` can only change together with
/// `duration_months`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    duration_months: Option<u32>,
    base_price_per_month: f64,
    discount_rate: f64,
}

impl Plan {
    /// Creates a plan with no duration selected.
    pub fn unselected(base_price_per_month: f64) -> Self {
        Self {
            duration_months: None,
            base_price_per_month,
            discount_rate: 0.0,
        }
    }

    /// Returns a copy of this plan with the given duration and its discount.
    pub fn with_duration(&self, duration_months: u32) -> Self {
        Self {
            duration_months: Some(duration_months),
            base_price_per_month: self.base_price_per_month,
            discount_rate: discount_rate_for(duration_months),
        }
    }

    pub fn duration_months(&self) -> Option<u32> {
        self.duration_months
    }

    pub fn base_price_per_month(&self) -> f64 {
        self.base_price_per_month
    }

    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    pub fn is_selected(&self) -> bool {
        self.duration_months.is_some()
    }

    /// Undiscounted plan cost, `None` while no duration is selected.
    pub fn base_total(&self) -> Option<f64> {
        self.duration_months
            .map(|months| self.base_price_per_month * f64::from(months))
    }

    /// Amount taken off the base total by the duration discount.
    pub fn discount_amount(&self) -> Option<f64> {
        self.base_total().map(|total| total * self.discount_rate)
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::unselected(DEFAULT_BASE_PRICE_PER_MONTH)
    }
}
