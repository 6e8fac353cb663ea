use crate::error::MarketError;
use crate::models::Agent;

use super::Catalog;

pub fn get<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Agent, MarketError> {
    catalog
        .agents
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| MarketError::NotFound("agent", id.to_string()))
}

pub fn for_agency<'a>(catalog: &'a Catalog, agency_id: &str) -> Vec<&'a Agent> {
    catalog
        .agents
        .iter()
        .filter(|a| a.agency_id.as_deref() == Some(agency_id))
        .collect()
}
