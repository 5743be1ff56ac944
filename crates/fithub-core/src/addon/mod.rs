//! Add-on selection state and the fixed add-on catalog.

mod catalog;
mod model;

pub use catalog::{ADDON_CATALOG, AddonOffer, find_addon};
pub use model::{AddonSelection, Addons};
