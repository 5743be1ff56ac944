//! Read-only views of the selection.

use anyhow::{Context, Result};

use fithub_core::addon::find_addon;
use fithub_core::pricing::{PriceBreakdown, format_money};
use fithub_core::selection::{Selection, SelectionStore};

pub fn summary(store: &SelectionStore) {
    print!(
        "{}",
        render_summary(store.selection(), &store.config().currency_symbol)
    );
}

pub fn show(store: &SelectionStore) -> Result<()> {
    let json = serde_json::to_string_pretty(store.selection())
        .context("Failed to serialize selection")?;
    println!("{}", json);
    Ok(())
}

pub fn render_summary(selection: &Selection, currency: &str) -> String {
    let Some(breakdown) = PriceBreakdown::from_selection(selection) else {
        return "No plan selected yet. Run `fithub plans` to see the options.\n".to_string();
    };
    let money = |amount: f64| format_money(amount, currency);
    let mut out = String::new();

    out.push_str(&format!("Plan: {} month(s)\n", breakdown.duration_months));
    out.push_str(&format!("  Base price      {:>12}\n", money(breakdown.plan_base_total)));
    if breakdown.discount_rate > 0.0 {
        out.push_str(&format!(
            "  Discount ({:>2.0}%)  {:>12}\n",
            breakdown.discount_rate * 100.0,
            format!("-{}", money(breakdown.plan_discount_amount))
        ));
    }
    out.push_str(&format!("  Plan total      {:>12}\n", money(breakdown.plan_total)));

    if let Some(goal) = selection.goal() {
        out.push_str(&format!("Goal: {}\n", goal.name));
    }

    if !breakdown.addon_lines.is_empty() {
        out.push_str("Add-ons:\n");
        for line in &breakdown.addon_lines {
            let name = find_addon(&line.id).map(|a| a.name).unwrap_or(line.id.as_str());
            out.push_str(&format!("  {:<16}{:>12}\n", name, money(line.total)));
        }
    }

    if let Some(user) = selection.user() {
        out.push_str(&format!("Member: {} <{}>\n", user.full_name(), user.email));
    }

    out.push_str(&format!("Total             {:>12}\n", money(breakdown.grand_total)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fithub_core::config::WizardConfig;
    use fithub_core::selection::InMemorySelectionRepository;
    use std::sync::Arc;

    fn store() -> SelectionStore {
        SelectionStore::new(
            Arc::new(InMemorySelectionRepository::new()),
            WizardConfig::default(),
        )
    }

    #[test]
    fn test_summary_without_plan() {
        let store = store();
        assert!(render_summary(store.selection(), "$").starts_with("No plan selected"));
    }

    #[test]
    fn test_summary_lists_discount_and_addons() {
        let mut store = store();
        store.set_plan(12);
        store.toggle_addon("personalTrainer", 50.0, true);
        store.toggle_addon("yoga", 25.0, false);

        let output = render_summary(store.selection(), "$");
        assert!(output.contains("Discount (15%)"));
        assert!(output.contains("-$90.00"));
        assert!(output.contains("Personal Trainer"));
        assert!(!output.contains("Yoga"));
        assert!(output.lines().last().unwrap().ends_with("$1110.00"));
    }
}
