use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// State of one add-on inside a selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonSelection {
    pub price_per_month: f64,
    pub selected: bool,
}

/// Every add-on ever toggled in a session, keyed by catalog id.
///
/// Entries are upserted and never removed. Ordered so that serialized output
/// is stable.
pub type Addons = BTreeMap<String, AddonSelection>;
