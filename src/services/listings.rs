use std::sync::Arc;

use chrono::Utc;

use crate::{
    config::Config,
    error::MarketError,
    helpers,
    models::{Property, PropertyStatus},
    store::{self, Catalog},
    validation::{self, PropertyForm},
};

/// Creates a listing from a validated form. New listings start pending
/// and unfeatured. When the listing belongs to an agency, its
/// subscription plan caps how many properties it may have listed.
pub async fn create_property(
    config: &Arc<Config>,
    catalog: &mut Catalog,
    form: &PropertyForm,
    agent_id: Option<String>,
    agency_id: Option<String>,
) -> Result<Property, MarketError> {
    let validated = validation::validate_property(form)?;

    if let Some(agency_id) = agency_id.as_deref() {
        let plan = store::agency::get(catalog, agency_id)?.subscription_plan;
        let limit = plan.property_limit();
        let listed = store::property::for_agency(catalog, agency_id).len();
        if listed >= limit {
            return Err(MarketError::PlanLimit { plan, limit });
        }
    }

    super::simulate_latency(config).await;

    let country = if validated.country.is_empty() {
        config.default_country.clone()
    } else {
        validated.country
    };

    let property = Property {
        id: helpers::generate_id("property"),
        title: validated.title,
        description: validated.description,
        price: validated.price,
        bedrooms: Some(validated.bedrooms),
        bathrooms: Some(validated.bathrooms),
        area: Some(validated.area),
        images: Vec::new(),
        address: validated.address,
        city: validated.city,
        state: validated.state,
        country,
        zip_code: validated.zip_code,
        property_type: validated.property_type,
        status: PropertyStatus::Pending,
        featured: false,
        agent_id,
        agency_id,
        created_at: Utc::now(),
    };
    store::property::insert(catalog, property.clone());

    Ok(property)
}

/// Re-validates the form and replaces the listing's editable fields.
/// Status, images, featured flag and ownership are untouched.
pub async fn update_property(
    config: &Arc<Config>,
    catalog: &mut Catalog,
    id: &str,
    form: &PropertyForm,
) -> Result<Property, MarketError> {
    let validated = validation::validate_property(form)?;

    super::simulate_latency(config).await;

    let property = catalog
        .properties
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| MarketError::NotFound("property", id.to_string()))?;

    property.title = validated.title;
    property.description = validated.description;
    property.price = validated.price;
    property.bedrooms = Some(validated.bedrooms);
    property.bathrooms = Some(validated.bathrooms);
    property.area = Some(validated.area);
    property.address = validated.address;
    property.city = validated.city;
    property.state = validated.state;
    property.zip_code = validated.zip_code;
    if !validated.country.is_empty() {
        property.country = validated.country;
    }
    property.property_type = validated.property_type;

    Ok(property.clone())
}

pub async fn delete_property(
    config: &Arc<Config>,
    catalog: &mut Catalog,
    id: &str,
) -> Result<(), MarketError> {
    super::simulate_latency(config).await;
    store::property::delete(catalog, id)
}
