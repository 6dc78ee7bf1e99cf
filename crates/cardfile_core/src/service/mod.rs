//! Coordinating service layer.
//!
//! # Responsibility
//! - Sit between the input boundary, the record store, and the view
//!   composer.
//!
//! # Invariants
//! - Services hold the working set; stores own durability; composers
//!   stay pure.

pub mod contact_service;

pub use contact_service::{ContactService, ContactServiceError, ServiceResult};
