//! Shared warehouse inventory model and in-memory store.
//!
//! This crate owns the product/component records, the typed endpoint set of
//! the `/products` HTTP contract, and the store that executes those endpoints.
//! Both the `warehouse` server and the browser `client` (mock backend) run
//! the same [`Store`], so the two backends cannot drift apart.
//!
//! Nothing here reads the wall clock or a random source directly: callers
//! pass `now` and a [`Sampler`], which keeps the crate usable on `wasm32`
//! and deterministic under test.

pub mod endpoint;
pub mod error;
pub mod model;
pub mod sample;
pub mod store;

pub use endpoint::{Ack, Endpoint, Method, Reply, decode_body};
pub use error::ApiError;
pub use model::{Component, ComponentDraft, Product, ProductDraft};
pub use sample::Sampler;
pub use store::Store;
