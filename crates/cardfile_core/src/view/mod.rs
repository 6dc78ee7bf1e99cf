//! Presentation-shaping layer.
//!
//! # Responsibility
//! - Derive the visible subset and order of a contact collection from a
//!   view state.
//!
//! # Invariants
//! - Composition is pure: no substrate access, no mutation of the input
//!   collection, identical output for identical input.
//! - Filtering always precedes ordering.

pub mod composer;

pub use composer::{compose_view, GroupFilter, SortOrder, ViewState};
