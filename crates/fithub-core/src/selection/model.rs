//! Selection domain model.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::addon::{AddonSelection, Addons};
use crate::goal::Goal;
use crate::plan::{DEFAULT_BASE_PRICE_PER_MONTH, Plan};
use crate::pricing::compute_total;
use crate::user::UserDetails;

/// A user's in-progress subscription choices plus the derived total.
///
/// Every transition returns a new value with `total_price` recomputed, so the
/// cached total always equals [`compute_total`] of `plan` and `addons`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub(crate) plan: Plan,
    pub(crate) goal: Option<Goal>,
    pub(crate) addons: Addons,
    pub(crate) user: Option<UserDetails>,
    pub(crate) total_price: f64,
}

/// Raw fields read back from durable storage.
///
/// Only the fields listed here survive a reload. Base price, discount and
/// total are always recomputed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedSelection {
    pub duration_months: Option<u32>,
    pub goal: Option<Goal>,
    pub addons: Addons,
    pub user: Option<UserDetails>,
}

impl Selection {
    /// The initial selection: nothing chosen, total 0.
    pub fn empty(base_price_per_month: f64) -> Self {
        Self {
            plan: Plan::unselected(base_price_per_month),
            goal: None,
            addons: Addons::new(),
            user: None,
            total_price: 0.0,
        }
    }

    /// Rebuilds a selection from persisted fields at the given base price.
    ///
    /// A zero or missing duration leaves the plan unselected. Non-finite
    /// add-on prices are stored as 0.
    pub fn from_persisted(persisted: PersistedSelection, base_price_per_month: f64) -> Self {
        let mut plan = Plan::unselected(base_price_per_month);
        if let Some(months) = persisted.duration_months.filter(|m| *m > 0) {
            plan = plan.with_duration(months);
        }

        let addons: Addons = persisted
            .addons
            .into_iter()
            .map(|(id, addon)| {
                let price_per_month = finite_price(&id, addon.price_per_month);
                (
                    id,
                    AddonSelection {
                        price_per_month,
                        ..addon
                    },
                )
            })
            .collect();

        let total_price = compute_total(&plan, &addons);
        Self {
            plan,
            goal: persisted.goal,
            addons,
            user: persisted.user,
            total_price,
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    pub fn addons(&self) -> &Addons {
        &self.addons
    }

    pub fn user(&self) -> Option<&UserDetails> {
        self.user.as_ref()
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    /// Whether the add-on is currently selected. Unknown ids are unselected.
    pub fn is_addon_selected(&self, id: &str) -> bool {
        self.addons.get(id).is_some_and(|addon| addon.selected)
    }

    /// Ids of the selected add-ons, sorted.
    pub fn selected_addon_ids(&self) -> Vec<&str> {
        self.addons
            .iter()
            .filter(|(_, addon)| addon.selected)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    // ============================================================================
    // Transitions
    // ============================================================================

    pub(crate) fn with_plan(&self, duration_months: u32) -> Self {
        let mut next = self.clone();
        next.plan = self.plan.with_duration(duration_months);
        next.refresh_total();
        next
    }

    pub(crate) fn with_goal(&self, goal: Goal) -> Self {
        Self {
            goal: Some(goal),
            ..self.clone()
        }
    }

    /// Re-prices the plan at `base_price_per_month`, keeping every choice.
    pub(crate) fn with_base_price(&self, base_price_per_month: f64) -> Self {
        let mut next = self.clone();
        next.plan = match self.plan.duration_months() {
            Some(months) => Plan::unselected(base_price_per_month).with_duration(months),
            None => Plan::unselected(base_price_per_month),
        };
        next.refresh_total();
        next
    }

    pub(crate) fn with_addon(&self, id: &str, price_per_month: f64, selected: bool) -> Self {
        let mut next = self.clone();
        next.addons.insert(
            id.to_string(),
            AddonSelection {
                price_per_month: finite_price(id, price_per_month),
                selected,
            },
        );
        next.refresh_total();
        next
    }

    pub(crate) fn with_user(&self, user: UserDetails) -> Self {
        Self {
            user: Some(user),
            ..self.clone()
        }
    }

    fn refresh_total(&mut self) {
        self.total_price = compute_total(&self.plan, &self.addons);
    }
}

/// Non-finite prices cannot be written to the slot; they are kept as 0.
fn finite_price(id: &str, price_per_month: f64) -> f64 {
    if price_per_month.is_finite() {
        price_per_month
    } else {
        warn!(addon_id = id, price_per_month, "Non-finite add-on price, storing 0");
        0.0
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::empty(DEFAULT_BASE_PRICE_PER_MONTH)
    }
}
