use serde::{Deserialize, Serialize};

/// A fitness objective chosen on the goals step.
///
/// Replaced wholesale on every selection; it never affects the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub sub_options: Vec<String>,
}
