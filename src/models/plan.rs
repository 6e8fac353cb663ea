use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    Basic,
    Standard,
    Premium,
}

impl SubscriptionPlan {
    pub fn display_name(&self) -> &'static str {
        match self {
            SubscriptionPlan::Basic => "Basic",
            SubscriptionPlan::Standard => "Standard",
            SubscriptionPlan::Premium => "Premium",
        }
    }

    /// Monthly price in USD.
    pub fn monthly_price(&self) -> u32 {
        match self {
            SubscriptionPlan::Basic => 29,
            SubscriptionPlan::Standard => 79,
            SubscriptionPlan::Premium => 199,
        }
    }

    /// Maximum number of listed properties the plan allows an agency.
    pub fn property_limit(&self) -> usize {
        match self {
            SubscriptionPlan::Basic => 5,
            SubscriptionPlan::Standard => 20,
            SubscriptionPlan::Premium => 100,
        }
    }
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDetails {
    pub plan: SubscriptionPlan,
    pub display_name: &'static str,
    pub monthly_price: u32,
    pub property_limit: usize,
    pub features: Vec<&'static str>,
    pub recommended: bool,
}

lazy_static! {
    /// The marketing plan table shown on the pricing page.
    pub static ref SUBSCRIPTION_PLANS: Vec<PlanDetails> = vec![
        PlanDetails {
            plan: SubscriptionPlan::Basic,
            display_name: "Basic",
            monthly_price: 29,
            property_limit: 5,
            features: vec![
                "List up to 5 properties",
                "Basic agency profile",
                "Email support",
                "Standard visibility in search",
            ],
            recommended: false,
        },
        PlanDetails {
            plan: SubscriptionPlan::Standard,
            display_name: "Standard",
            monthly_price: 79,
            property_limit: 20,
            features: vec![
                "List up to 20 properties",
                "Enhanced agency profile",
                "Priority email support",
                "Higher visibility in search",
                "Property analytics",
            ],
            recommended: true,
        },
        PlanDetails {
            plan: SubscriptionPlan::Premium,
            display_name: "Premium",
            monthly_price: 199,
            property_limit: 100,
            features: vec![
                "List up to 100 properties",
                "Premium agency profile with custom branding",
                "Priority phone & email support",
                "Top visibility in search",
                "Advanced property analytics",
                "Featured listings",
                "Dedicated account manager",
            ],
            recommended: false,
        },
    ];
}
