use std::sync::Arc;

use crate::{config::Config, data, services::auth::Session, store::Catalog};

/// Application state built once at the composition root and passed down
/// explicitly; there are no module-level singletons.
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Catalog,
    pub session: Option<Session>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        let mut catalog = if config.seed_demo_data {
            data::mock::seed()
        } else {
            Catalog::new()
        };
        catalog.link();

        AppState {
            config,
            catalog,
            session: None,
        }
    }

    pub fn teardown(&mut self) {
        self.session = None;
        self.catalog = Catalog::new();
    }
}
