use dotenvy::dotenv;
use log::error;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    /// Fixed latency added to every mock backend operation.
    pub api_delay_ms: u64,
    /// Start from the demo dataset instead of an empty catalog.
    pub seed_demo_data: bool,
    /// Country stamped onto listings created without one.
    pub default_country: String,
}

pub fn create_test_config() -> Config {
    Config {
        api_delay_ms: 0,
        seed_demo_data: true,
        default_country: "USA".to_string(),
    }
}

pub fn read_config() -> Config {
    dotenv().ok();
    env::var(CONFIG_PATH_ENV)
        .map_err(|_| format!("{CONFIG_PATH_ENV} .env not set"))
        .and_then(|config_path| std::fs::read(config_path).map_err(|e| e.to_string()))
        .and_then(|bytes| toml::from_slice(&bytes).map_err(|e| e.to_string()))
        .unwrap_or_else(|err| {
            error!("failed to read config: {err}");
            std::process::exit(1);
        })
}
