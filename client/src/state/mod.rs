//! Per-page view state.
//!
//! DESIGN
//! ======
//! Each page owns one `RwSignal` of its state struct. Completed requests
//! merge their returned entity through the methods here instead of
//! re-fetching, so the merge rules are plain functions with unit tests.

pub mod notice;
pub mod product_detail;
pub mod products;
