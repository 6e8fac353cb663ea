use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub photo: Option<String>,
    pub bio: Option<String>,
    pub agency_id: Option<String>,
    /// Derived. Recomputed by [`Catalog::link`](crate::store::Catalog::link),
    /// not maintained incrementally.
    pub property_ids: Vec<String>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}
