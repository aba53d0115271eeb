use std::sync::Arc;

use cache::UserCache;
use config::Config;
use services::{HealthService, ListingService, WriteService};
use store::UserStore;

pub mod cache;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod store;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub listing: ListingService,
    pub writes: WriteService,
    pub health: HealthService,
}

impl AppState {
    /// Wires the services around one store and one optional cache. `cache`
    /// is `None` when caching is disabled by configuration.
    pub fn new(
        config: Config,
        store: Arc<dyn UserStore>,
        cache: Option<Arc<dyn UserCache>>,
    ) -> Self {
        Self {
            listing: ListingService::new(store.clone(), cache.clone()),
            writes: WriteService::new(store.clone(), cache.clone()),
            health: HealthService::new(store, cache),
            config,
        }
    }
}
