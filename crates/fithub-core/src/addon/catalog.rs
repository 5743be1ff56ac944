//! Paid extras offered on the add-ons step.

/// A catalog add-on with its fixed monthly price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AddonOffer {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price_per_month: f64,
}

pub const ADDON_CATALOG: [AddonOffer; 4] = [
    AddonOffer {
        id: "personalTrainer",
        name: "Personal Trainer",
        description: "One-on-one guidance from an expert trainer",
        price_per_month: 50.0,
    },
    AddonOffer {
        id: "dietConsultation",
        name: "Diet Consultation",
        description: "Personalized nutrition plan and guidance",
        price_per_month: 30.0,
    },
    AddonOffer {
        id: "yoga",
        name: "Yoga Classes",
        description: "Access to all yoga and meditation sessions",
        price_per_month: 25.0,
    },
    AddonOffer {
        id: "swimming",
        name: "Swimming Pool",
        description: "Unlimited access to swimming facilities",
        price_per_month: 35.0,
    },
];

pub fn find_addon(id: &str) -> Option<&'static AddonOffer> {
    ADDON_CATALOG.iter().find(|offer| offer.id == id)
}
