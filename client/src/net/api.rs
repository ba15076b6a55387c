//! Data-access shim for the `/products` contract.
//!
//! DESIGN
//! ======
//! [`ApiClient`] has two backends selected at build time:
//! - `Mock`: an in-browser [`Store`] that answers every endpoint after a
//!   simulated delay. Enabled with the `mock-api` feature.
//! - `Http`: real requests via `gloo-net` against
//!   `WAREHOUSE_API_BASE_URL` (same origin when unset).
//!
//! Both resolve to the same typed [`Reply`], so pages never see which one
//! answered.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an [`ApiError`]. Server-side (SSR) builds have no
//! browser fetch, so the HTTP backend reports a network error there; pages
//! only issue requests from hydrated code.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use inventory::{
    ApiError, Component, ComponentDraft, Endpoint, Method, Product, ProductDraft, Reply, Sampler, Store,
};
use time::OffsetDateTime;

/// Delay applied by the mock backend before answering.
pub const DEFAULT_MOCK_LATENCY: Duration = Duration::from_millis(500);

/// Handle to the product data source. Cheap to clone.
#[derive(Clone)]
pub enum ApiClient {
    Mock(MockBackend),
    Http(HttpBackend),
}

impl ApiClient {
    /// Mock backend over `store` with the default delay.
    #[must_use]
    pub fn mock(store: Store) -> Self {
        Self::Mock(MockBackend::new(store))
    }

    /// HTTP backend rooted at `base_url` (no trailing slash).
    #[must_use]
    pub fn http(base_url: impl Into<String>) -> Self {
        Self::Http(HttpBackend::new(base_url))
    }

    /// Backend chosen by the `mock-api` feature and `WAREHOUSE_API_BASE_URL`.
    #[must_use]
    pub fn from_build_config() -> Self {
        if cfg!(feature = "mock-api") {
            Self::mock(Store::demo(OffsetDateTime::now_utc()))
        } else {
            Self::http(option_env!("WAREHOUSE_API_BASE_URL").unwrap_or_default())
        }
    }

    /// Execute one endpoint.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`ApiError`]: store errors from the mock,
    /// transport, status, and decode errors from HTTP.
    pub async fn request(&self, endpoint: Endpoint) -> Result<Reply, ApiError> {
        let name = endpoint.name();
        let result = match self {
            Self::Mock(mock) => mock.request(endpoint).await,
            Self::Http(http) => http.request(endpoint).await,
        };
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = &result {
                log::warn!("{name} failed: {e}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = name;
        result
    }

    /// Execute a request given as a route string.
    ///
    /// `method` defaults to GET; `body` is raw JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnhandledRoute`] or [`ApiError::InvalidBody`] when
    /// the route does not resolve, otherwise whatever [`Self::request`] returns.
    pub async fn fetch(&self, method: Option<Method>, path: &str, body: Option<&str>) -> Result<Reply, ApiError> {
        let endpoint = Endpoint::resolve(method, path, body)?;
        self.request(endpoint).await
    }

    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.request(Endpoint::ListProducts).await?.into_products()
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no product has this id.
    pub async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        self.request(Endpoint::GetProduct { id: id.to_owned() }).await?.into_product()
    }

    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn list_components(&self, product_id: &str) -> Result<Vec<Component>, ApiError> {
        self.request(Endpoint::ListComponents { product_id: product_id.to_owned() })
            .await?
            .into_components()
    }

    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, ApiError> {
        self.request(Endpoint::CreateProduct(draft)).await?.into_product()
    }

    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        self.request(Endpoint::DeleteProduct { id: id.to_owned() }).await?.into_ack()
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when the product does not exist.
    pub async fn create_component(&self, product_id: &str, draft: ComponentDraft) -> Result<Component, ApiError> {
        self.request(Endpoint::CreateComponent { product_id: product_id.to_owned(), draft })
            .await?
            .into_component()
    }

    /// # Errors
    ///
    /// See [`Self::request`].
    pub async fn delete_component(&self, product_id: &str, component_id: &str) -> Result<(), ApiError> {
        self.request(Endpoint::DeleteComponent {
            product_id: product_id.to_owned(),
            component_id: component_id.to_owned(),
        })
        .await?
        .into_ack()
    }

    /// # Errors
    ///
    /// [`ApiError::NotFound`] when no product has this id.
    pub async fn toggle_product(&self, id: &str) -> Result<Product, ApiError> {
        self.request(Endpoint::ToggleProduct { id: id.to_owned() }).await?.into_product()
    }
}

// =============================================================================
// MOCK BACKEND
// =============================================================================

struct MockState {
    store: Store,
    sampler: Box<dyn Sampler + Send>,
}

/// Waits out a simulated delay before the mock answers.
pub type Pause = fn(Duration) -> Pin<Box<dyn Future<Output = ()>>>;

/// In-browser store answering the contract after a fixed delay.
#[derive(Clone)]
pub struct MockBackend {
    state: Arc<Mutex<MockState>>,
    latency: Duration,
    pause: Pause,
}

impl MockBackend {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self::with_sampler(store, default_sampler())
    }

    /// Mock drawing synthetic readings from `sampler`.
    #[must_use]
    pub fn with_sampler(store: Store, sampler: Box<dyn Sampler + Send>) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState { store, sampler })),
            latency: DEFAULT_MOCK_LATENCY,
            pause: default_pause,
        }
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the timer used to wait out the latency.
    #[must_use]
    pub fn with_pause(mut self, pause: Pause) -> Self {
        self.pause = pause;
        self
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn request(&self, endpoint: Endpoint) -> Result<Reply, ApiError> {
        if !self.latency.is_zero() {
            (self.pause)(self.latency).await;
        }
        let mut guard = self
            .state
            .lock()
            .map_err(|_| ApiError::Network("mock store lock poisoned".to_owned()))?;
        let MockState { store, sampler } = &mut *guard;
        store.handle(endpoint, OffsetDateTime::now_utc(), sampler.as_mut())
    }
}

#[cfg(feature = "hydrate")]
fn default_pause(latency: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
    Box::pin(gloo_timers::future::sleep(latency))
}

// Outside the browser there is no timer to await; requests answer at once.
#[cfg(not(feature = "hydrate"))]
fn default_pause(_latency: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
    Box::pin(std::future::ready(()))
}

/// `Math.random` in the browser.
#[cfg(feature = "hydrate")]
struct BrowserSampler;

#[cfg(feature = "hydrate")]
impl Sampler for BrowserSampler {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + js_sys::Math::random() * (max - min)
    }
}

#[cfg(feature = "hydrate")]
fn default_sampler() -> Box<dyn Sampler + Send> {
    Box::new(BrowserSampler)
}

#[cfg(not(feature = "hydrate"))]
fn default_sampler() -> Box<dyn Sampler + Send> {
    Box::new(inventory::sample::Midpoint)
}

// =============================================================================
// HTTP BACKEND
// =============================================================================

/// Client for the contract served over HTTP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Absolute URL for an endpoint.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    async fn request(&self, endpoint: Endpoint) -> Result<Reply, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(&endpoint);
            let builder = match endpoint.method() {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
                method => return Err(ApiError::UnhandledRoute { method, path: endpoint.path() }),
            };
            let network = |e: gloo_net::Error| ApiError::Network(e.to_string());
            let resp = match endpoint.body() {
                Some(body) => builder.json(&body).map_err(network)?.send().await,
                None => builder.send().await,
            }
            .map_err(network)?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let value: serde_json::Value = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            endpoint.decode_reply(value)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Network(format!("{} is only available in the browser", self.url(&endpoint))))
        }
    }
}
