//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It owns the inventory store for the lifetime of the server; nothing
//! else holds product data, so a fresh `AppState` is a fresh warehouse.

use std::sync::Arc;
use std::time::Duration;

use inventory::Store;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    /// Delay applied before every API operation resolves.
    pub simulated_latency: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(store: Store, simulated_latency: Duration) -> Self {
        Self { store: Arc::new(RwLock::new(store)), simulated_latency }
    }

    /// Build state from config, seeding the demo warehouse when enabled.
    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let store = if config.seed_demo_data { Store::demo(OffsetDateTime::now_utc()) } else { Store::new() };
        Self::new(store, config.simulated_latency)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use inventory::Product;

    /// Demo warehouse, no simulated latency.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Store::demo(OffsetDateTime::now_utc()), Duration::ZERO)
    }

    /// Store holding only the given `(id, is_active)` products.
    #[must_use]
    pub fn app_state_with_products(products: &[(&str, bool)]) -> AppState {
        let products = products
            .iter()
            .map(|(id, is_active)| Product {
                id: (*id).to_owned(),
                name: format!("Unit {id}"),
                description: String::new(),
                is_active: *is_active,
            })
            .collect();
        AppState::new(Store::with_products(products), Duration::ZERO)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
