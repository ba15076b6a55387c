//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own store access and operation logging so route
//! handlers can stay focused on protocol translation.

pub mod catalog;
