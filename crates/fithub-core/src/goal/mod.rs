//! Fitness goal model and the fixed goal catalog.

mod catalog;
mod model;

pub use catalog::{GOAL_CATALOG, GoalOffer, find_goal};
pub use model::Goal;
