use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation lifecycle of a listing. New listings start out pending and
/// only show up publicly once an admin approves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    Pending,
    Approved,
    Rejected,
    Sold,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Pending => "pending",
            PropertyStatus::Approved => "approved",
            PropertyStatus::Rejected => "rejected",
            PropertyStatus::Sold => "sold",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub area: Option<f64>,
    pub images: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub zip_code: Option<String>,
    /// Free-text category ("Apartment", "Loft", "Villa", ...).
    pub property_type: String,
    pub status: PropertyStatus,
    pub featured: bool,
    pub agent_id: Option<String>,
    pub agency_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
