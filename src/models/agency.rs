use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::plan::SubscriptionPlan;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub location: String,
    pub address: String,
    pub subscription_plan: SubscriptionPlan,
    pub verified: bool,
    /// Derived. Recomputed by [`Catalog::link`](crate::store::Catalog::link).
    pub agent_ids: Vec<String>,
    /// Derived, see `agent_ids`.
    pub property_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}
