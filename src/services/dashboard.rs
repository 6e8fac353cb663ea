use std::sync::Arc;

use serde::Serialize;

use crate::{
    config::Config,
    error::MarketError,
    models::{Agency, Property, PropertyStatus},
    store::{self, Catalog},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_properties: usize,
    pub total_agents: usize,
    pub total_agencies: usize,
    pub pending_properties: usize,
    pub pending_agencies: usize,
}

/// Pure aggregate over the catalog; recomputed on demand.
pub fn stats(catalog: &Catalog) -> DashboardStats {
    DashboardStats {
        total_properties: catalog.properties.len(),
        total_agents: catalog.agents.len(),
        total_agencies: catalog.agencies.len(),
        pending_properties: store::property::pending(catalog).len(),
        pending_agencies: store::agency::pending(catalog).len(),
    }
}

pub fn pending_properties(catalog: &Catalog) -> Vec<&Property> {
    store::property::pending(catalog)
}

pub fn pending_agencies(catalog: &Catalog) -> Vec<&Agency> {
    store::agency::pending(catalog)
}

pub async fn approve_property(
    config: &Arc<Config>,
    catalog: &mut Catalog,
    id: &str,
) -> Result<(), MarketError> {
    super::simulate_latency(config).await;
    store::property::set_status(catalog, id, PropertyStatus::Approved)
}

pub async fn reject_property(
    config: &Arc<Config>,
    catalog: &mut Catalog,
    id: &str,
) -> Result<(), MarketError> {
    super::simulate_latency(config).await;
    store::property::set_status(catalog, id, PropertyStatus::Rejected)
}

pub async fn approve_agency(
    config: &Arc<Config>,
    catalog: &mut Catalog,
    id: &str,
) -> Result<(), MarketError> {
    super::simulate_latency(config).await;
    store::agency::set_verified(catalog, id, true)
}

/// Rejection only drops the agency from the pending view; the record
/// itself stays, still unverified.
pub async fn reject_agency(
    config: &Arc<Config>,
    catalog: &mut Catalog,
    id: &str,
) -> Result<(), MarketError> {
    super::simulate_latency(config).await;
    store::agency::get(catalog, id)?;
    Ok(())
}
