use std::sync::Arc;

use anyhow::Result;
use log::{error, info};

use estatehub::{
    config::{self, Config},
    logger::setup_logger,
    models,
    search::{self, SearchFilters, SearchQuery, Selection},
    services::{auth, dashboard},
    state::AppState,
    store,
};

#[tokio::main]
async fn main() -> Result<()> {
    setup_logger()?;

    let config: Arc<Config> = Arc::new(config::read_config());
    let mut state = AppState::new(config.clone());

    let stats = dashboard::stats(&state.catalog);
    info!(
        "Catalog ready: {} properties, {} agents, {} agencies",
        stats.total_properties, stats.total_agents, stats.total_agencies
    );

    for plan in models::SUBSCRIPTION_PLANS.iter() {
        info!(
            "Plan {}: ${}/mo, up to {} listings",
            plan.display_name, plan.monthly_price, plan.property_limit
        );
    }

    for property in store::property::featured(&state.catalog) {
        info!(
            "Featured: {} - {} ({}, ${:.0})",
            property.id, property.title, property.city, property.price
        );
    }

    // Sample query: lofts in Los Angeles under $2M.
    let mut query = SearchQuery::new();
    query.set_term("loft");
    let mut filters = SearchFilters::default();
    filters.location = Some(Selection::One("Los Angeles".to_string()));
    filters.max_price = Some(2_000_000.0);
    query.set_filters(filters);

    let hits = search::results::run_property_query(&state.catalog.properties, &query);
    info!(
        "{} properties match \"{}\" with {} active filters",
        hits.len(),
        query.term(),
        query.active_filters_count()
    );
    for property in &hits {
        info!("  {} - {} (${:.0})", property.id, property.title, property.price);
    }
    if let Some(first) = hits.first() {
        info!("First match:\n{}", serde_json::to_string_pretty(first)?);
    }

    // Same engine over agencies: premium plans only.
    let mut agency_query = SearchQuery::new();
    let mut agency_filters = SearchFilters::default();
    agency_filters.subscription_plan = Some(models::SubscriptionPlan::Premium);
    agency_query.set_filters(agency_filters);

    let agency_hits = search::results::run_agency_query(&state.catalog.agencies, &agency_query);
    info!("{} agencies on the premium plan", agency_hits.len());
    for agency in &agency_hits {
        info!("  {} - {} ({})", agency.id, agency.name, agency.location);
    }

    match auth::login(
        &config,
        &state.catalog,
        "sarah@luxuryhomes.example.com",
        "password123",
    )
    .await
    {
        Ok(session) => {
            info!("Signed in as {} ({})", session.user.name, session.user.role);
            state.session = Some(session);
        }
        Err(err) => error!("Sign-in failed: {err}"),
    }

    state.teardown();
    Ok(())
}
