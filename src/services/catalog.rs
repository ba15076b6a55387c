//! Catalog service: runs inventory endpoints against the shared store.
//!
//! DESIGN
//! ======
//! Every operation first waits the configured simulated latency, then takes
//! the store lock, executes synchronously, and releases the lock before
//! returning. The lock is never held across an await point.

use inventory::{ApiError, Endpoint, Method, Reply, Sampler};
use rand::Rng;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Uniform sampler backed by the thread-local `rand` generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandSampler;

impl Sampler for RandSampler {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        if min >= max {
            return min;
        }
        rand::rng().random_range(min..max)
    }
}

/// Execute one endpoint after the simulated network delay.
///
/// # Errors
///
/// Propagates the store's [`ApiError`] (not-found lookups, toggles, and
/// component creation on unknown products).
pub async fn execute(state: &AppState, endpoint: Endpoint) -> Result<Reply, ApiError> {
    if !state.simulated_latency.is_zero() {
        tokio::time::sleep(state.simulated_latency).await;
    }

    let name = endpoint.name();
    let method = endpoint.method();
    let path = endpoint.path();

    let result = {
        let mut store = state.store.write().await;
        store.handle(endpoint, OffsetDateTime::now_utc(), &mut RandSampler)
    };

    match &result {
        Ok(_) if method == Method::Get => debug!(endpoint = name, %path, "inventory read"),
        Ok(_) => info!(endpoint = name, %method, %path, "inventory write applied"),
        Err(e) => warn!(endpoint = name, %method, %path, error = %e, "inventory operation failed"),
    }
    result
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;
