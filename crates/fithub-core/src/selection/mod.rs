//! The selection aggregate, the store that owns it, and its persistence seam.

mod model;
mod repository;
mod store;

pub use model::{PersistedSelection, Selection};
pub use repository::{InMemorySelectionRepository, SelectionRepository};
pub use store::SelectionStore;
