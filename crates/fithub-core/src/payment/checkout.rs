use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::model::{PaymentMethod, PaymentReceipt};
use crate::error::{FithubError, Result};
use crate::selection::Selection;

/// Completes a simulated payment for the selection's current total.
///
/// Requires a selected plan and registered personal details.
pub fn checkout(selection: &Selection, method: PaymentMethod) -> Result<PaymentReceipt> {
    if !selection.plan().is_selected() {
        return Err(FithubError::validation("No plan selected"));
    }
    if selection.user().is_none() {
        return Err(FithubError::validation("No registration details"));
    }

    let receipt = PaymentReceipt {
        id: Uuid::new_v4(),
        method,
        amount: selection.total_price(),
        paid_at: Utc::now(),
    };
    info!(
        receipt_id = %receipt.id,
        method = method.id(),
        amount = receipt.amount,
        "Payment completed"
    );
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserDetails;

    #[test]
    fn test_checkout_requires_plan() {
        let selection = Selection::empty(50.0).with_user(UserDetails::default());
        let err = checkout(&selection, PaymentMethod::Credit).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("No plan selected"));
    }

    #[test]
    fn test_checkout_requires_user() {
        let selection = Selection::empty(50.0).with_plan(3);
        let err = checkout(&selection, PaymentMethod::Nagad).unwrap_err();
        assert!(err.to_string().contains("No registration details"));
    }

    #[test]
    fn test_receipt_charges_total() {
        let selection = Selection::empty(50.0)
            .with_plan(6)
            .with_addon("yoga", 25.0, true)
            .with_user(UserDetails::default());

        let first = checkout(&selection, PaymentMethod::Bkash).unwrap();
        let second = checkout(&selection, PaymentMethod::Bkash).unwrap();
        assert_eq!(first.amount, selection.total_price());
        assert_eq!(first.method, PaymentMethod::Bkash);
        assert_ne!(first.id, second.id);
    }
}
