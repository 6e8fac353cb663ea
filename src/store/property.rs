use crate::error::MarketError;
use crate::models::{Property, PropertyStatus};

use super::Catalog;

pub fn get<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Property, MarketError> {
    catalog
        .properties
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| MarketError::NotFound("property", id.to_string()))
}

pub fn insert(catalog: &mut Catalog, property: Property) {
    catalog.properties.push(property);
}

pub fn update(catalog: &mut Catalog, property: Property) -> Result<(), MarketError> {
    let slot = catalog
        .properties
        .iter_mut()
        .find(|p| p.id == property.id)
        .ok_or_else(|| MarketError::NotFound("property", property.id.clone()))?;
    *slot = property;
    Ok(())
}

pub fn delete(catalog: &mut Catalog, id: &str) -> Result<(), MarketError> {
    let before = catalog.properties.len();
    catalog.properties.retain(|p| p.id != id);
    if catalog.properties.len() == before {
        return Err(MarketError::NotFound("property", id.to_string()));
    }
    Ok(())
}

pub fn set_status(
    catalog: &mut Catalog,
    id: &str,
    status: PropertyStatus,
) -> Result<(), MarketError> {
    let property = catalog
        .properties
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| MarketError::NotFound("property", id.to_string()))?;
    property.status = status;
    Ok(())
}

pub fn pending(catalog: &Catalog) -> Vec<&Property> {
    catalog
        .properties
        .iter()
        .filter(|p| p.status == PropertyStatus::Pending)
        .collect()
}

pub fn featured(catalog: &Catalog) -> Vec<&Property> {
    catalog.properties.iter().filter(|p| p.featured).collect()
}

pub fn for_agency<'a>(catalog: &'a Catalog, agency_id: &str) -> Vec<&'a Property> {
    catalog
        .properties
        .iter()
        .filter(|p| p.agency_id.as_deref() == Some(agency_id))
        .collect()
}

pub fn for_agent<'a>(catalog: &'a Catalog, agent_id: &str) -> Vec<&'a Property> {
    catalog
        .properties
        .iter()
        .filter(|p| p.agent_id.as_deref() == Some(agent_id))
        .collect()
}
