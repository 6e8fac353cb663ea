use serde::{Deserialize, Serialize};

use crate::models::{Agency, Property, PropertyStatus, SubscriptionPlan};

/// Single- vs multi-select contract for the categorical filters. The two
/// observed UI variants disagreed on this, so the choice is explicit at
/// the call site instead of baked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    One(String),
    AnyOf(Vec<String>),
}

impl Selection {
    /// Case-insensitive equality for `One`, membership for `AnyOf`. An
    /// empty multi-select imposes no constraint.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::One(want) => want.eq_ignore_ascii_case(value),
            Selection::AnyOf(options) => {
                options.is_empty() || options.iter().any(|o| o.eq_ignore_ascii_case(value))
            }
        }
    }
}

/// Structured filter set. Every field is optional; absence means no
/// constraint on that axis. All set fields must pass for an entity to be
/// included (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub location: Option<Selection>,
    pub property_type: Option<Selection>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<f64>,
    pub subscription_plan: Option<SubscriptionPlan>,
    pub status: Option<PropertyStatus>,
    /// `true` restricts to featured listings; `false` is no constraint.
    pub featured: bool,
}

impl SearchFilters {
    /// Number of filter fields that are set and not `false`. Drives the
    /// filter badge in the UI.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.location.is_some() {
            count += 1;
        }
        if self.property_type.is_some() {
            count += 1;
        }
        if self.min_price.is_some() {
            count += 1;
        }
        if self.max_price.is_some() {
            count += 1;
        }
        if self.min_bedrooms.is_some() {
            count += 1;
        }
        if self.min_bathrooms.is_some() {
            count += 1;
        }
        if self.subscription_plan.is_some() {
            count += 1;
        }
        if self.status.is_some() {
            count += 1;
        }
        if self.featured {
            count += 1;
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Per-field pass/fail for one listing, combined with logical AND.
    ///
    /// Price bounds are inclusive on both sides. A set bedroom/bathroom
    /// bound fails listings whose count is unknown.
    pub fn matches_property(&self, property: &Property) -> bool {
        if let Some(location) = &self.location {
            if !location.matches(&property.city) {
                return false;
            }
        }
        if let Some(kind) = &self.property_type {
            if !kind.matches(&property.property_type) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if property.price > max {
                return false;
            }
        }
        if let Some(min) = self.min_bedrooms {
            match property.bedrooms {
                Some(count) if count >= min => {}
                _ => return false,
            }
        }
        if let Some(min) = self.min_bathrooms {
            match property.bathrooms {
                Some(count) if count >= min => {}
                _ => return false,
            }
        }
        if let Some(status) = self.status {
            if property.status != status {
                return false;
            }
        }
        if self.featured && !property.featured {
            return false;
        }
        true
    }

    /// Agencies are only constrained by the fields that apply to them.
    pub fn matches_agency(&self, agency: &Agency) -> bool {
        if let Some(location) = &self.location {
            if !location.matches(&agency.location) {
                return false;
            }
        }
        if let Some(plan) = self.subscription_plan {
            if agency.subscription_plan != plan {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive substring match of the free-text term against an
/// entity's primary name field. An empty term matches everything.
pub fn term_matches(term: &str, name: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&term.to_lowercase())
}
