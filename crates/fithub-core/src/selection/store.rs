//! Selection store: the single owner of the in-progress selection.
//!
//! The store is constructed explicitly at startup and handed to whatever
//! drives the wizard. Each mutation replaces the selection with a new value and
//! then writes the full value to the repository before returning.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::model::Selection;
use super::repository::SelectionRepository;
use crate::config::WizardConfig;
use crate::goal::Goal;
use crate::user::UserDetails;

pub struct SelectionStore {
    selection: Selection,
    config: WizardConfig,
    repository: Arc<dyn SelectionRepository>,
}

impl SelectionStore {
    /// Creates a store holding the empty selection without reading storage.
    pub fn new(repository: Arc<dyn SelectionRepository>, config: WizardConfig) -> Self {
        Self {
            selection: Selection::empty(config.base_price_per_month),
            config,
            repository,
        }
    }

    /// Creates a store from whatever the repository holds.
    ///
    /// Missing or unreadable state yields the empty selection; the failure is
    /// logged and not returned. A restored plan is re-priced at the configured
    /// base price. The restored value is written back so the slot always
    /// reflects the current schema.
    pub fn restore(repository: Arc<dyn SelectionRepository>, config: WizardConfig) -> Self {
        let mut store = Self::new(repository, config);

        match store.repository.load() {
            Ok(Some(selection)) => {
                info!(
                    duration_months = ?selection.plan().duration_months(),
                    addons = selection.addons().len(),
                    total_price = selection.total_price(),
                    "Restored saved selection"
                );
                store.selection = selection.with_base_price(store.config.base_price_per_month);
            }
            Ok(None) => {
                debug!("No saved selection, starting empty");
            }
            Err(e) => {
                warn!(error = %e, "Error loading saved selection, starting empty");
            }
        }

        store.persist();
        store
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Selects a plan duration; the discount follows from the duration.
    ///
    /// Durations outside the catalog are accepted with no discount.
    pub fn set_plan(&mut self, duration_months: u32) -> &Selection {
        debug!(duration_months, "Setting plan");
        let next = self.selection.with_plan(duration_months);
        self.commit(next)
    }

    /// Replaces the goal. Does not affect the price.
    pub fn set_goal(&mut self, goal: Goal) -> &Selection {
        debug!(goal_id = %goal.id, "Setting goal");
        let next = self.selection.with_goal(goal);
        self.commit(next)
    }

    /// Upserts an add-on with the *desired* selected flag.
    ///
    /// Callers pass the flag they want, not a request to flip; see
    /// [`SelectionStore::flip_addon`] for the read-then-negate variant.
    pub fn toggle_addon(&mut self, id: &str, price_per_month: f64, selected: bool) -> &Selection {
        debug!(addon_id = id, price_per_month, selected, "Toggling add-on");
        let next = self.selection.with_addon(id, price_per_month, selected);
        self.commit(next)
    }

    /// Negates the current flag of an add-on (unknown ids count as unselected).
    pub fn flip_addon(&mut self, id: &str, price_per_month: f64) -> &Selection {
        let selected = !self.selection.is_addon_selected(id);
        self.toggle_addon(id, price_per_month, selected)
    }

    /// Replaces the personal details. Does not affect the price.
    pub fn set_user(&mut self, user: UserDetails) -> &Selection {
        debug!("Setting user details");
        let next = self.selection.with_user(user);
        self.commit(next)
    }

    /// Discards every choice and returns to the empty selection.
    pub fn reset(&mut self) -> &Selection {
        info!("Resetting selection");
        let next = Selection::empty(self.config.base_price_per_month);
        self.commit(next)
    }

    fn commit(&mut self, next: Selection) -> &Selection {
        self.selection = next;
        self.persist();
        &self.selection
    }

    fn persist(&self) {
        match self.repository.save(&self.selection) {
            Ok(()) => debug!(total_price = self.selection.total_price(), "Selection saved"),
            Err(e) => warn!(error = %e, "Failed to save selection"),
        }
    }
}
