use std::{fmt, sync::Arc};

use catalog_core::ProductRepository;

use crate::infra::config::Config;

/// Shared per-request state: the store port and the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ProductRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProductRepository>, config: Arc<Config>) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
