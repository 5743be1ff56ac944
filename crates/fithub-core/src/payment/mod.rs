//! Simulated checkout.
//!
//! No money moves; a checkout checks that the selection is complete and
//! issues a receipt for its current total.

mod checkout;
mod model;

pub use checkout::checkout;
pub use model::{PaymentMethod, PaymentReceipt};
