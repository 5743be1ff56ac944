//! Commands that change the selection.

use anyhow::{Result, anyhow, bail};
use clap::Args;

use fithub_core::addon::{ADDON_CATALOG, find_addon};
use fithub_core::goal::{GOAL_CATALOG, find_goal};
use fithub_core::plan::find_plan_offer;
use fithub_core::pricing::format_money;
use fithub_core::selection::SelectionStore;
use fithub_core::user::UserDetails;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub address: String,
}

impl From<RegisterArgs> for UserDetails {
    fn from(args: RegisterArgs) -> Self {
        UserDetails {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone: args.phone,
            address: args.address,
        }
    }
}

pub fn plan(store: &mut SelectionStore, months: u32) {
    if find_plan_offer(months).is_none() {
        eprintln!("Note: {} months is not a listed plan; no discount applies", months);
    }
    let currency = store.config().currency_symbol.clone();
    let selection = store.set_plan(months);
    println!(
        "Plan set to {} month(s). Total: {}",
        months,
        format_money(selection.total_price(), &currency)
    );
}

pub fn goal(store: &mut SelectionStore, id: &str) -> Result<()> {
    let offer = find_goal(id).ok_or_else(|| {
        let known: Vec<&str> = GOAL_CATALOG.iter().map(|g| g.id).collect();
        anyhow!("Unknown goal '{}' (expected one of: {})", id, known.join(", "))
    })?;
    store.set_goal(offer.to_goal());
    println!("Goal set to {}", offer.name);
    Ok(())
}

/// Flips an add-on on or off.
pub fn addon(store: &mut SelectionStore, id: &str) -> Result<()> {
    let offer = find_addon(id).ok_or_else(|| {
        let known: Vec<&str> = ADDON_CATALOG.iter().map(|a| a.id).collect();
        anyhow!("Unknown add-on '{}' (expected one of: {})", id, known.join(", "))
    })?;
    let currency = store.config().currency_symbol.clone();
    let selection = store.flip_addon(offer.id, offer.price_per_month);
    let state = if selection.is_addon_selected(offer.id) {
        "added"
    } else {
        "removed"
    };
    println!(
        "{} {}. Total: {}",
        offer.name,
        state,
        format_money(selection.total_price(), &currency)
    );
    Ok(())
}

/// Stores the details only when every field passes validation.
pub fn register(store: &mut SelectionStore, args: RegisterArgs) -> Result<()> {
    let user = UserDetails::from(args);
    if let Err(errors) = user.validate() {
        for error in &errors.errors {
            eprintln!("  {}: {}", error.field, error.message);
        }
        bail!("Registration details are invalid");
    }
    let name = user.full_name();
    store.set_user(user);
    println!("Registered {}", name);
    Ok(())
}

pub fn reset(store: &mut SelectionStore) {
    store.reset();
    println!("Selection cleared");
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

    fn args(email: &str) -> RegisterArgs {
        RegisterArgs {
            first_name: "Tanvir".to_string(),
            last_name: "Ahmed".to_string(),
            email: email.to_string(),
            phone: "01812345678".to_string(),
            address: "Road 2, Uttara".to_string(),
        }
    }

    #[test]
    fn test_unknown_goal_is_rejected() {
        let mut store = store();
        let err = goal(&mut store, "flexibility").unwrap_err();
        assert!(err.to_string().contains("weight-loss"));
        assert!(store.selection().goal().is_none());
    }

    #[test]
    fn test_addon_command_flips() {
        let mut store = store();
        plan(&mut store, 6);
        addon(&mut store, "yoga").unwrap();
        assert!((store.selection().total_price() - 420.0).abs() < 1e-9);
        addon(&mut store, "yoga").unwrap();
        assert!((store.selection().total_price() - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_addon_is_rejected() {
        let mut store = store();
        assert!(addon(&mut store, "sauna").is_err());
        assert!(store.selection().addons().is_empty());
    }

    #[test]
    fn test_invalid_registration_is_not_stored() {
        let mut store = store();
        assert!(register(&mut store, args("not-an-email")).is_err());
        assert!(store.selection().user().is_none());
    }

    #[test]
    fn test_valid_registration_is_stored() {
        let mut store = store();
        register(&mut store, args("tanvir@example.com")).unwrap();
        assert_eq!(store.selection().user().unwrap().full_name(), "Tanvir Ahmed");
    }
}
