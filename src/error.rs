use thiserror::Error;

use crate::models::SubscriptionPlan;
use crate::validation::ValidationErrors;

/// Failure modes of the mock backend operations. The original simulated
/// calls could only succeed; surfacing errors here lets call sites handle
/// failure without restructuring.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("{0} not found: {1}")]
    NotFound(&'static str, String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("{plan} plan allows at most {limit} listed properties")]
    PlanLimit {
        plan: SubscriptionPlan,
        limit: usize,
    },

    #[error("invalid credentials")]
    InvalidCredentials,
}
