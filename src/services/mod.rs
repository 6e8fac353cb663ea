//! Mock backend operations. Each call sleeps for the configured latency
//! and resolves to a `Result`, so call sites already have a failure path
//! when a real backend replaces this one.

pub mod agencies;
pub mod auth;
pub mod dashboard;
pub mod listings;

use std::time::Duration;

use crate::config::Config;

pub(crate) async fn simulate_latency(config: &Config) {
    if config.api_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(config.api_delay_ms)).await;
    }
}
