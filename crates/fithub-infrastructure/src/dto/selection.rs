//! Selection DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema: plan (duration, base price, discount), goal, add-ons, user, total
//! - **1.1.0**: Added optional `savedAt` timestamp, written on every save
//!
//! Data written by the browser wizard carries no `version` key and uses short
//! field names (`duration`, `basePrice`, `price`). It is read through
//! [`LegacySelection`] instead of the migrator.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use fithub_core::addon::{AddonSelection, Addons};
use fithub_core::goal::Goal;
use fithub_core::plan::DEFAULT_BASE_PRICE_PER_MONTH;
use fithub_core::selection::{PersistedSelection, Selection};
use fithub_core::user::UserDetails;

/// Entity name under which selections are registered with the migrator.
pub const SELECTION_ENTITY: &str = "selection";

// ============================================================================
// Nested DTOs (shared by 1.0.0 and 1.1.0)
// ============================================================================

/// Plan DTO. `basePricePerMonth` and `discountRate` are written for readers
/// of the file but never trusted on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanDTO {
    pub duration_months: Option<u32>,
    pub base_price_per_month: Option<f64>,
    pub discount_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalDTO {
    pub id: String,
    pub name: String,
    pub description: String,
    pub sub_options: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddonDTO {
    pub price_per_month: f64,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDTO {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl From<GoalDTO> for Goal {
    fn from(dto: GoalDTO) -> Self {
        Goal {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            sub_options: dto.sub_options,
        }
    }
}

impl From<&Goal> for GoalDTO {
    fn from(goal: &Goal) -> Self {
        GoalDTO {
            id: goal.id.clone(),
            name: goal.name.clone(),
            description: goal.description.clone(),
            sub_options: goal.sub_options.clone(),
        }
    }
}

impl From<AddonDTO> for AddonSelection {
    fn from(dto: AddonDTO) -> Self {
        AddonSelection {
            price_per_month: dto.price_per_month,
            selected: dto.selected,
        }
    }
}

impl From<&AddonSelection> for AddonDTO {
    fn from(addon: &AddonSelection) -> Self {
        AddonDTO {
            price_per_month: addon.price_per_month,
            selected: addon.selected,
        }
    }
}

impl From<UserDTO> for UserDetails {
    fn from(dto: UserDTO) -> Self {
        UserDetails {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            phone: dto.phone,
            address: dto.address,
        }
    }
}

impl From<&UserDetails> for UserDTO {
    fn from(user: &UserDetails) -> Self {
        UserDTO {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
        }
    }
}

// ============================================================================
// Versioned selection DTOs
// ============================================================================

/// Selection V1.0.0 (initial version).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct SelectionV1_0_0 {
    #[serde(default)]
    pub plan: PlanDTO,
    #[serde(default)]
    pub goal: Option<GoalDTO>,
    #[serde(default)]
    pub addons: BTreeMap<String, AddonDTO>,
    #[serde(default)]
    pub user: Option<UserDTO>,
    /// Cached total at save time. Recomputed on load.
    #[serde(default)]
    pub total_price: f64,
}

/// Selection V1.1.0.
///
/// Added `saved_at` (RFC 3339, UTC) so a stale slot can be recognised.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
#[serde(rename_all = "camelCase")]
pub struct SelectionV1_1_0 {
    #[serde(default)]
    pub plan: PlanDTO,
    #[serde(default)]
    pub goal: Option<GoalDTO>,
    #[serde(default)]
    pub addons: BTreeMap<String, AddonDTO>,
    #[serde(default)]
    pub user: Option<UserDTO>,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
}

/// Type alias for the latest Selection version.
pub type SelectionDTO = SelectionV1_1_0;

/// Migration from SelectionV1_0_0 to SelectionV1_1_0.
/// Adds saved_at with no value.
impl version_migrate::MigratesTo<SelectionV1_1_0> for SelectionV1_0_0 {
    fn migrate(self) -> SelectionV1_1_0 {
        SelectionV1_1_0 {
            plan: self.plan,
            goal: self.goal,
            addons: self.addons,
            user: self.user,
            total_price: self.total_price,
            saved_at: None,
        }
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl From<SelectionV1_1_0> for PersistedSelection {
    fn from(dto: SelectionV1_1_0) -> Self {
        PersistedSelection {
            duration_months: dto.plan.duration_months,
            goal: dto.goal.map(Into::into),
            addons: dto
                .addons
                .into_iter()
                .map(|(id, addon)| (id, addon.into()))
                .collect::<Addons>(),
            user: dto.user.map(Into::into),
        }
    }
}

/// Convert SelectionV1_1_0 DTO to domain model.
///
/// Base price, discount and total are recomputed from the stored duration and
/// add-ons; the stored `basePricePerMonth`, `discountRate` and `totalPrice` are
/// ignored. The store re-prices the plan at its configured base price.
impl IntoDomain<Selection> for SelectionV1_1_0 {
    fn into_domain(self) -> Selection {
        Selection::from_persisted(self.into(), DEFAULT_BASE_PRICE_PER_MONTH)
    }
}

/// Convert domain model to SelectionV1_1_0 DTO for persistence.
impl FromDomain<Selection> for SelectionV1_1_0 {
    fn from_domain(selection: Selection) -> Self {
        let plan = selection.plan();
        SelectionV1_1_0 {
            plan: PlanDTO {
                duration_months: plan.duration_months(),
                base_price_per_month: Some(plan.base_price_per_month()),
                discount_rate: plan.discount_rate(),
            },
            goal: selection.goal().map(GoalDTO::from),
            addons: selection
                .addons()
                .iter()
                .map(|(id, addon)| (id.clone(), AddonDTO::from(addon)))
                .collect(),
            user: selection.user().map(UserDTO::from),
            total_price: selection.total_price(),
            saved_at: Some(Utc::now().to_rfc3339()),
        }
    }
}

// ============================================================================
// Legacy (unversioned) browser format
// ============================================================================

/// Only the duration is read; `basePrice` and `discount` are recomputed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegacyPlan {
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegacyAddon {
    pub price: f64,
    pub selected: bool,
}

/// Selection as stored by the browser wizard, before schema versioning.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegacySelection {
    pub plan: Option<LegacyPlan>,
    pub goal: Option<GoalDTO>,
    pub addons: Option<BTreeMap<String, LegacyAddon>>,
    pub user: Option<UserDTO>,
}

impl LegacySelection {
    /// True when `value` looks like a legacy document (an object with no `version`).
    pub fn matches(value: &serde_json::Value) -> bool {
        value
            .as_object()
            .is_some_and(|object| !object.contains_key("version"))
    }
}

impl From<LegacySelection> for PersistedSelection {
    fn from(legacy: LegacySelection) -> Self {
        let plan = legacy.plan.unwrap_or_default();
        PersistedSelection {
            duration_months: plan.duration,
            goal: legacy.goal.map(Into::into),
            addons: legacy
                .addons
                .unwrap_or_default()
                .into_iter()
                .map(|(id, addon)| {
                    (
                        id,
                        AddonSelection {
                            price_per_month: addon.price,
                            selected: addon.selected,
                        },
                    )
                })
                .collect(),
            user: legacy.user.map(Into::into),
        }
    }
}

// ============================================================================
// Migrator factory
// ============================================================================

/// Creates and configures a Migrator instance for Selection entities.
///
/// # Migration Path
///
/// - V1.0.0 → V1.1.0: Adds `savedAt` with no value
/// - V1.1.0 → Selection: Rebuilds the domain model, recomputing discount and total
///
/// # Example
///
/// ```ignore
/// let migrator = create_selection_migrator();
/// let selection: Selection = migrator.load_flat_from("selection", json_value)?;
/// ```
pub fn create_selection_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    // Register migration path: V1.0.0 -> V1.1.0 -> Selection
    let selection_path = version_migrate::Migrator::define(SELECTION_ENTITY)
        .from::<SelectionV1_0_0>()
        .step::<SelectionV1_1_0>()
        .into_with_save::<Selection>();

    migrator
        .register(selection_path)
        .expect("Failed to register selection migration path");

    migrator
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_selection_migrator_creation() {
        let _migrator = create_selection_migrator();
    }

    #[test]
    fn test_selection_migration_v1_0_0_to_domain() {
        let migrator = create_selection_migrator();

        let value = json!({
            "version": "1.0.0",
            "plan": { "durationMonths": 6, "basePricePerMonth": 50.0, "discountRate": 0.5 },
            "goal": {
                "id": "endurance",
                "name": "Endurance",
                "description": "Improve stamina and cardiovascular health",
                "subOptions": ["Long Distance Training", "Interval Workouts", "Recovery Focus"]
            },
            "addons": {
                "yoga": { "pricePerMonth": 25.0, "selected": true },
                "swimming": { "pricePerMonth": 35.0, "selected": false }
            },
            "user": null,
            "totalPrice": 9999.0
        });

        let result: Result<Selection, _> = migrator.load_flat_from(SELECTION_ENTITY, value);
        assert!(result.is_ok(), "Migration failed: {:?}", result.err());
        let selection = result.unwrap();

        // Stored discount and total are not trusted
        assert_eq!(selection.plan().discount_rate(), 0.10);
        assert!(approx_eq(selection.total_price(), 420.0));
        assert_eq!(selection.goal().unwrap().id, "endurance");
        assert_eq!(selection.addons().len(), 2);
        assert!(selection.user().is_none());
    }

    #[test]
    fn test_missing_fields_fall_back_to_empty() {
        let migrator = create_selection_migrator();
        let value = json!({ "version": "1.1.0" });

        let selection: Selection = migrator.load_flat_from(SELECTION_ENTITY, value).unwrap();
        assert_eq!(selection, Selection::default());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let migrator = create_selection_migrator();
        let value = json!({
            "version": "1.1.0",
            "plan": { "durationMonths": 1 },
            "paymentMethod": "credit",
            "theme": "dark"
        });

        let selection: Selection = migrator.load_flat_from(SELECTION_ENTITY, value).unwrap();
        assert_eq!(selection.plan().duration_months(), Some(1));
        assert!(approx_eq(selection.total_price(), 50.0));
    }

    #[test]
    fn test_stored_base_price_is_ignored() {
        let migrator = create_selection_migrator();
        let value = json!({
            "version": "1.1.0",
            "plan": { "durationMonths": 12, "basePricePerMonth": 0.01, "discountRate": 0.15 },
            "totalPrice": 0.102
        });

        let selection: Selection = migrator.load_flat_from(SELECTION_ENTITY, value).unwrap();
        assert_eq!(
            selection.plan().base_price_per_month(),
            DEFAULT_BASE_PRICE_PER_MONTH
        );
        assert!(approx_eq(selection.total_price(), 510.0));
    }

    #[test]
    fn test_selection_save() {
        let migrator = create_selection_migrator();
        let selection = Selection::from_persisted(
            PersistedSelection {
                duration_months: Some(3),
                ..PersistedSelection::default()
            },
            DEFAULT_BASE_PRICE_PER_MONTH,
        );

        let result = migrator.save_domain_flat(SELECTION_ENTITY, selection);
        assert!(result.is_ok());
        let value: serde_json::Value = serde_json::from_str(&result.unwrap()).unwrap();

        assert_eq!(value["version"], "1.1.0");
        assert_eq!(value["plan"]["durationMonths"], 3);
        assert_eq!(value["plan"]["discountRate"], 0.05);
        assert!(value["savedAt"].is_string());
        assert!(value["goal"].is_null());
    }

    #[test]
    fn test_legacy_selection_conversion() {
        let value = json!({
            "plan": { "duration": 12, "basePrice": 50, "discount": 0.15 },
            "goal": null,
            "addons": { "personalTrainer": { "price": 50, "selected": true } },
            "user": null,
            "totalPrice": 1110
        });
        assert!(LegacySelection::matches(&value));

        let legacy: LegacySelection = serde_json::from_value(value).unwrap();
        let selection = Selection::from_persisted(legacy.into(), DEFAULT_BASE_PRICE_PER_MONTH);
        assert_eq!(selection.plan().duration_months(), Some(12));
        assert!(approx_eq(selection.total_price(), 510.0 + 600.0));
    }

    #[test]
    fn test_versioned_document_is_not_legacy() {
        assert!(!LegacySelection::matches(&json!({ "version": "1.0.0" })));
        assert!(!LegacySelection::matches(&json!([1, 2, 3])));
    }
}
