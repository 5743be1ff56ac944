//! Domain core of the FitHub subscription wizard.
//!
//! The wizard walks a user through plan, goal, add-ons, summary, registration
//! and payment. All of those steps read from and write into one
//! [`selection::Selection`], owned by a [`selection::SelectionStore`] and
//! priced by [`pricing::compute_total`].

pub mod addon;
pub mod config;
pub mod error;
pub mod goal;
pub mod payment;
pub mod plan;
pub mod pricing;
pub mod selection;
pub mod user;

// Re-export common types
pub use error::FithubError;
pub use selection::{Selection, SelectionRepository, SelectionStore};
