use std::sync::Arc;

use chrono::Utc;

use crate::{
    config::Config,
    error::MarketError,
    helpers,
    models::{Agency, SubscriptionPlan},
    store::{self, Catalog},
    validation::{self, none_if_empty, AgencyForm},
};

/// Creates an agency from the admin form. New agencies start unverified
/// and on the basic plan unless the form picked one.
pub async fn create_agency(
    config: &Arc<Config>,
    catalog: &mut Catalog,
    form: &AgencyForm,
) -> Result<Agency, MarketError> {
    validation::validate_agency(form)?;

    super::simulate_latency(config).await;

    let agency = Agency {
        id: helpers::generate_id("agency"),
        user_id: helpers::generate_id("user"),
        name: form.name.trim().to_string(),
        logo: None,
        website: none_if_empty(&form.website),
        facebook: None,
        instagram: None,
        location: form.location.trim().to_string(),
        address: form.address.trim().to_string(),
        subscription_plan: form.subscription_plan.unwrap_or(SubscriptionPlan::Basic),
        verified: false,
        agent_ids: Vec::new(),
        property_ids: Vec::new(),
        created_at: Utc::now(),
    };
    store::agency::insert(catalog, agency.clone());

    Ok(agency)
}

/// Flips the verified flag, as the admin verify/unverify button does.
pub async fn toggle_verification(
    config: &Arc<Config>,
    catalog: &mut Catalog,
    id: &str,
) -> Result<Agency, MarketError> {
    super::simulate_latency(config).await;

    let verified = store::agency::get(catalog, id)?.verified;
    store::agency::set_verified(catalog, id, !verified)?;
    Ok(store::agency::get(catalog, id)?.clone())
}

pub async fn change_plan(
    config: &Arc<Config>,
    catalog: &mut Catalog,
    id: &str,
    plan: SubscriptionPlan,
) -> Result<Agency, MarketError> {
    super::simulate_latency(config).await;

    store::agency::set_plan(catalog, id, plan)?;
    Ok(store::agency::get(catalog, id)?.clone())
}
