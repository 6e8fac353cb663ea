use crate::error::MarketError;
use crate::models::{Agency, SubscriptionPlan};

use super::Catalog;

pub fn get<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Agency, MarketError> {
    catalog
        .agencies
        .iter()
        .find(|a| a.id == id)
        .ok_or_else(|| MarketError::NotFound("agency", id.to_string()))
}

pub fn insert(catalog: &mut Catalog, agency: Agency) {
    catalog.agencies.push(agency);
}

pub fn set_verified(catalog: &mut Catalog, id: &str, verified: bool) -> Result<(), MarketError> {
    let agency = get_mut(catalog, id)?;
    agency.verified = verified;
    Ok(())
}

pub fn set_plan(
    catalog: &mut Catalog,
    id: &str,
    plan: SubscriptionPlan,
) -> Result<(), MarketError> {
    let agency = get_mut(catalog, id)?;
    agency.subscription_plan = plan;
    Ok(())
}

pub fn pending(catalog: &Catalog) -> Vec<&Agency> {
    catalog.agencies.iter().filter(|a| !a.verified).collect()
}

fn get_mut<'a>(catalog: &'a mut Catalog, id: &str) -> Result<&'a mut Agency, MarketError> {
    catalog
        .agencies
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| MarketError::NotFound("agency", id.to_string()))
}
