use std::fmt;

use crate::models::SubscriptionPlan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Accumulated form-level failures, surfaced per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn push_error(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&rendered.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Strict numeric parsing for form input. Anything that does not parse as
/// a finite positive number is rejected, instead of letting NaN leak into
/// the filter comparisons.
pub fn parse_positive_number(field: &'static str, raw: &str) -> Result<f64, FieldError> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(FieldError {
            field,
            message: format!("{field} must be a positive number"),
        }),
    }
}

/// Optional numeric bound from a text field; empty input means unbounded.
pub fn parse_price_bound(field: &'static str, raw: &str) -> Result<Option<f64>, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(Some(n)),
        _ => Err(FieldError {
            field,
            message: format!("{field} must be a non-negative number"),
        }),
    }
}

fn require_len(errors: &mut ValidationErrors, field: &'static str, value: &str, min: usize) {
    if value.trim().chars().count() < min {
        errors.push(field, format!("{field} must be at least {min} characters"));
    }
}

/// Raw listing form values as typed into the dialog; numeric fields arrive
/// as text and are parsed during validation.
#[derive(Debug, Clone, Default)]
pub struct PropertyForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub property_type: String,
}

/// Listing form after validation, with numerics parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProperty {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub area: f64,
    pub address: String,
    pub city: String,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: String,
    pub property_type: String,
}

pub fn validate_property(form: &PropertyForm) -> Result<ValidatedProperty, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    require_len(&mut errors, "title", &form.title, 5);
    require_len(&mut errors, "description", &form.description, 20);
    require_len(&mut errors, "address", &form.address, 5);
    require_len(&mut errors, "city", &form.city, 2);
    require_len(&mut errors, "property_type", &form.property_type, 2);

    let price = match parse_positive_number("price", &form.price) {
        Ok(n) => n,
        Err(e) => {
            errors.push_error(e);
            0.0
        }
    };

    let bedrooms = match form.bedrooms.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            errors.push("bedrooms", "bedrooms must be a positive whole number");
            0
        }
    };

    let bathrooms = match parse_positive_number("bathrooms", &form.bathrooms) {
        Ok(n) => n,
        Err(e) => {
            errors.push_error(e);
            0.0
        }
    };

    let area = match parse_positive_number("area", &form.area) {
        Ok(n) => n,
        Err(e) => {
            errors.push_error(e);
            0.0
        }
    };

    errors.into_result()?;

    Ok(ValidatedProperty {
        title: form.title.trim().to_string(),
        description: form.description.trim().to_string(),
        price,
        bedrooms,
        bathrooms,
        area,
        address: form.address.trim().to_string(),
        city: form.city.trim().to_string(),
        state: none_if_empty(&form.state),
        zip_code: none_if_empty(&form.zip_code),
        country: form.country.trim().to_string(),
        property_type: form.property_type.trim().to_string(),
    })
}

#[derive(Debug, Clone, Default)]
pub struct AgencyForm {
    pub name: String,
    pub email: String,
    pub website: String,
    pub location: String,
    pub address: String,
    pub subscription_plan: Option<SubscriptionPlan>,
}

pub fn validate_agency(form: &AgencyForm) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    require_len(&mut errors, "name", &form.name, 2);
    require_len(&mut errors, "location", &form.location, 2);
    require_len(&mut errors, "address", &form.address, 5);

    if !form.email.trim().is_empty() && !form.email.contains('@') {
        errors.push("email", "email must be a valid address");
    }

    errors.into_result()
}

pub fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
