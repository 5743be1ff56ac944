//! Wizard configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer; every field has a
//! default so a missing or partial file still yields a usable configuration.

use serde::{Deserialize, Serialize};

use crate::error::{FithubError, Result};
use crate::plan::DEFAULT_BASE_PRICE_PER_MONTH;

/// Default name of the durable storage slot.
pub const DEFAULT_STORAGE_SLOT: &str = "gymSubscription";

/// Runtime configuration for the subscription wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WizardConfig {
    /// Monthly base price used for fresh and reset selections.
    pub base_price_per_month: f64,
    /// Name of the slot the selection is persisted under.
    pub storage_slot: String,
    /// Symbol prefixed to formatted amounts.
    pub currency_symbol: String,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            base_price_per_month: DEFAULT_BASE_PRICE_PER_MONTH,
            storage_slot: DEFAULT_STORAGE_SLOT.to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl WizardConfig {
    /// Checks that the configured values can be used.
    pub fn validate(&self) -> Result<()> {
        if !self.base_price_per_month.is_finite() || self.base_price_per_month <= 0.0 {
            return Err(FithubError::config(format!(
                "basePricePerMonth must be a positive number, got {}",
                self.base_price_per_month
            )));
        }
        let slot = self.storage_slot.trim();
        if slot.is_empty() {
            return Err(FithubError::config("storageSlot must not be empty"));
        }
        if slot.contains(['/', '\\']) || slot == "." || slot == ".." {
            return Err(FithubError::config(format!(
                "storageSlot '{}' must be a plain name",
                self.storage_slot
            )));
        }
        Ok(())
    }
}
