use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::FithubError;

/// Payment options offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Credit,
    Bkash,
    Nagad,
    Rocket,
    Bank,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Credit,
        PaymentMethod::Bkash,
        PaymentMethod::Nagad,
        PaymentMethod::Rocket,
        PaymentMethod::Bank,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PaymentMethod::Credit => "credit",
            PaymentMethod::Bkash => "bkash",
            PaymentMethod::Nagad => "nagad",
            PaymentMethod::Rocket => "rocket",
            PaymentMethod::Bank => "bank",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Credit => "Credit Card",
            PaymentMethod::Bkash => "bKash",
            PaymentMethod::Nagad => "Nagad",
            PaymentMethod::Rocket => "Rocket",
            PaymentMethod::Bank => "Bank Transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PaymentMethod {
    type Err = FithubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        PaymentMethod::ALL
            .into_iter()
            .find(|method| method.id() == wanted)
            .ok_or_else(|| FithubError::validation(format!("Unknown payment method '{}'", s)))
    }
}

/// Proof of a completed (simulated) payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub id: Uuid,
    pub method: PaymentMethod,
    pub amount: f64,
    pub paid_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payment_method() {
        assert_eq!("credit".parse::<PaymentMethod>().unwrap(), PaymentMethod::Credit);
        assert_eq!(" BKash ".parse::<PaymentMethod>().unwrap(), PaymentMethod::Bkash);
        for method in PaymentMethod::ALL {
            assert_eq!(method.id().parse::<PaymentMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_unknown_payment_method() {
        let err = "paypal".parse::<PaymentMethod>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_serializes_as_id() {
        assert_eq!(
            serde_json::to_value(PaymentMethod::Bank).unwrap(),
            serde_json::json!("bank")
        );
    }
}
