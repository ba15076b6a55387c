//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers kept out of components so their math can be unit tested
//! without a DOM.

pub mod chart;
