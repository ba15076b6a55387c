//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless: they render the records they are given and
//! report user actions through callbacks. Pages own all request logic.

pub mod alert;
pub mod component_card;
pub mod create_dialog;
pub mod graph;
pub mod product_card;
