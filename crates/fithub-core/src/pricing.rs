//! Price computation for a selection.
//!
//! `compute_total` is the single source of truth for the cached total in a
//! [`Selection`]. Amounts are plain `f64`; rounding to cents happens only in
//! [`format_money`].

use serde::Serialize;

use crate::addon::{AddonSelection, Addons};
use crate::plan::Plan;
use crate::selection::Selection;

/// Discounted cost of the plan alone, zero while no duration is selected.
pub fn plan_cost(plan: &Plan) -> f64 {
    match plan.duration_months() {
        Some(months) => {
            plan.base_price_per_month() * f64::from(months) * (1.0 - plan.discount_rate())
        }
        None => 0.0,
    }
}

/// Cost of one add-on over the plan duration. Unselected add-ons cost nothing.
pub fn addon_cost(addon: &AddonSelection, duration_months: u32) -> f64 {
    if addon.selected {
        addon.price_per_month * f64::from(duration_months)
    } else {
        0.0
    }
}

/// Total price of a plan plus its selected add-ons.
///
/// Returns 0 when no duration is selected, regardless of add-ons.
pub fn compute_total(plan: &Plan, addons: &Addons) -> f64 {
    let Some(months) = plan.duration_months() else {
        return 0.0;
    };

    let addons_cost: f64 = addons
        .values()
        .map(|addon| addon_cost(addon, months))
        .sum();

    plan_cost(plan) + addons_cost
}

/// Formats an amount with two decimals, e.g. `$420.00`.
pub fn format_money(amount: f64, currency_symbol: &str) -> String {
    format!("{}{:.2}", currency_symbol, amount)
}

/// One selected add-on on the summary page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonLine {
    pub id: String,
    pub price_per_month: f64,
    pub total: f64,
}

/// Itemised price of a selection, as shown before payment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub duration_months: u32,
    pub discount_rate: f64,
    pub plan_base_total: f64,
    pub plan_discount_amount: f64,
    pub plan_total: f64,
    pub addon_lines: Vec<AddonLine>,
    pub addons_total: f64,
    pub grand_total: f64,
}

impl PriceBreakdown {
    /// Itemises a selection. `None` when no plan duration is selected.
    pub fn from_selection(selection: &Selection) -> Option<Self> {
        let plan = &selection.plan;
        let months = plan.duration_months()?;

        let plan_base_total = plan.base_total()?;
        let plan_discount_amount = plan.discount_amount()?;
        let plan_total = plan_base_total - plan_discount_amount;

        // BTreeMap iteration keeps lines sorted by id.
        let addon_lines: Vec<AddonLine> = selection
            .addons
            .iter()
            .filter(|(_, addon)| addon.selected)
            .map(|(id, addon)| AddonLine {
                id: id.clone(),
                price_per_month: addon.price_per_month,
                total: addon_cost(addon, months),
            })
            .collect();
        let addons_total = addon_lines.iter().map(|line| line.total).sum::<f64>();

        Some(Self {
            duration_months: months,
            discount_rate: plan.discount_rate(),
            plan_base_total,
            plan_discount_amount,
            plan_total,
            addon_lines,
            addons_total,
            grand_total: plan_total + addons_total,
        })
    }
}
