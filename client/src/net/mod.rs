//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the only way pages reach product data. It hides whether the
//! `/products` contract is served over HTTP or by an in-browser store.

pub mod api;
