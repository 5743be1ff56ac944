//! Catalog listings with the current choice marked.

use fithub_core::addon::ADDON_CATALOG;
use fithub_core::goal::GOAL_CATALOG;
use fithub_core::plan::{PLAN_CATALOG, PlanOffer};
use fithub_core::pricing::format_money;
use fithub_core::selection::{Selection, SelectionStore};

fn marker(chosen: bool) -> &'static str {
    if chosen { "*" } else { " " }
}

pub fn plans(store: &SelectionStore) {
    print!(
        "{}",
        render_plans(store.selection(), &store.config().currency_symbol)
    );
}

pub fn goals(store: &SelectionStore) {
    print!("{}", render_goals(store.selection()));
}

pub fn addons(store: &SelectionStore) {
    print!(
        "{}",
        render_addons(store.selection(), &store.config().currency_symbol)
    );
}

/// Plan cards priced at the selection's own base price.
pub fn render_plans(selection: &Selection, currency: &str) -> String {
    let base = selection.plan().base_price_per_month();
    let current = selection.plan().duration_months();
    let mut out = String::from("Plans:\n");

    for offer in PLAN_CATALOG.iter() {
        let offer = PlanOffer {
            base_price_per_month: base,
            ..*offer
        };

        out.push_str(&format!(
            " {} {:<10} {:>10}",
            marker(current == Some(offer.duration_months)),
            offer.name,
            format_money(offer.total_after_discount(), currency)
        ));
        if offer.savings() > 0.0 {
            out.push_str(&format!(
                "  (save {:.0}%, was {})",
                offer.discount_rate() * 100.0,
                format_money(offer.total_before_discount(), currency)
            ));
        }
        out.push('\n');
    }
    out
}

pub fn render_goals(selection: &Selection) -> String {
    let current = selection.goal().map(|g| g.id.as_str());
    let mut out = String::from("Goals:\n");

    for offer in GOAL_CATALOG.iter() {
        out.push_str(&format!(
            " {} {} {:<16} {}\n",
            marker(current == Some(offer.id)),
            offer.icon,
            offer.id,
            offer.description
        ));
    }
    out
}

pub fn render_addons(selection: &Selection, currency: &str) -> String {
    let mut out = String::from("Add-ons:\n");

    for offer in ADDON_CATALOG.iter() {
        out.push_str(&format!(
            " {} {:<17} {:>8}/month  {}\n",
            marker(selection.is_addon_selected(offer.id)),
            offer.id,
            format_money(offer.price_per_month, currency),
            offer.description
        ));
    }
    out
}
