//! Personal details captured on the registration step.

mod model;
mod validation;

pub use model::UserDetails;
pub use validation::{FieldError, ValidationErrors};
