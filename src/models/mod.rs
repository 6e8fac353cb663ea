pub mod agency;
pub mod agent;
pub mod plan;
pub mod property;
pub mod user;

pub use agency::Agency;
pub use agent::Agent;
pub use plan::{PlanDetails, SubscriptionPlan, SUBSCRIPTION_PLANS};
pub use property::{Property, PropertyStatus};
pub use user::{User, UserRole};
