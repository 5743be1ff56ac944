//! Plan domain model and the fixed plan catalog.
//!
//! A plan is a billing duration with a monthly base price; its discount is
//! always derived from the duration.

mod catalog;
mod model;

pub use catalog::{PLAN_CATALOG, PlanOffer, find_plan_offer};
pub use model::{DEFAULT_BASE_PRICE_PER_MONTH, Plan, SUPPORTED_DURATIONS, discount_rate_for};
