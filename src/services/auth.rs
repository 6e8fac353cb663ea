use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    config::Config,
    error::MarketError,
    helpers,
    models::{User, UserRole},
    store::Catalog,
    validation::ValidationErrors,
};

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub user: User,
    pub logged_in_at: DateTime<Utc>,
}

/// Mock sign-in. There is no password store; the password is only checked
/// for shape, and the account must exist in the catalog.
pub async fn login(
    config: &Arc<Config>,
    catalog: &Catalog,
    email: &str,
    password: &str,
) -> Result<Session, MarketError> {
    check_credentials(email, password)?;

    super::simulate_latency(config).await;

    let user = catalog
        .users
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email))
        .cloned()
        .ok_or(MarketError::InvalidCredentials)?;

    Ok(Session {
        user,
        logged_in_at: Utc::now(),
    })
}

pub async fn register(
    config: &Arc<Config>,
    catalog: &mut Catalog,
    name: &str,
    email: &str,
    password: &str,
    role: UserRole,
) -> Result<Session, MarketError> {
    let mut errors = ValidationErrors::default();
    if name.trim().chars().count() < 2 {
        errors.push("name", "name must be at least 2 characters");
    }
    if !email.contains('@') {
        errors.push("email", "email must be a valid address");
    }
    if password.len() < 6 {
        errors.push("password", "password must be at least 6 characters");
    }
    if catalog
        .users
        .iter()
        .any(|u| u.email.eq_ignore_ascii_case(email))
    {
        errors.push("email", "an account with this email already exists");
    }
    errors.into_result()?;

    super::simulate_latency(config).await;

    let user = User {
        id: helpers::generate_id("user"),
        email: email.trim().to_string(),
        name: name.trim().to_string(),
        role,
        created_at: Utc::now(),
    };
    catalog.users.push(user.clone());

    Ok(Session {
        user,
        logged_in_at: Utc::now(),
    })
}

fn check_credentials(email: &str, password: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if !email.contains('@') {
        errors.push("email", "email must be a valid address");
    }
    if password.len() < 6 {
        errors.push("password", "password must be at least 6 characters");
    }
    errors.into_result()
}
