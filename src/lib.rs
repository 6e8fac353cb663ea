pub mod config;
pub mod data;
pub mod error;
pub mod helpers;
pub mod logger;
pub mod models;
pub mod search;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;

pub use error::MarketError;
pub use state::AppState;
