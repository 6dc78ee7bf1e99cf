//! Domain model for the contact collection.
//!
//! # Responsibility
//! - Define the canonical record plus the draft/patch shapes write paths
//!   consume.
//! - Keep one wire-stable contact shape shared by storage and views.
//!
//! # Invariants
//! - Every record is identified by a stable, opaque `ContactId`.
//! - Deletion is a hard removal from the collection; there are no
//!   tombstones or history.

pub mod contact;
