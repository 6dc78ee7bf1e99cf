//! Durable record store layer.
//!
//! # Responsibility
//! - Define the store contract and shared store error types.
//! - House the slot-backed SQLite store and its detached stand-in.
//!
//! # Invariants
//! - The whole contact collection lives under one slot key as a single
//!   serialized value; stores never address individual records in the
//!   substrate.
//! - Absent records are outcomes (`None` / `false`), never errors.

pub mod contact_store;

pub use contact_store::{
    seed_contacts, ContactStore, DetachedContactStore, SqliteContactStore, CONTACTS_SLOT_KEY,
};

use crate::db::DbError;
use crate::model::contact::Contact;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level failure for slot persistence operations.
///
/// Degrades (malformed slot data, absent records, detached substrate) are
/// not errors; only genuine substrate faults surface here.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Encode(serde_json::Error),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode contact collection: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated to slot schema version {expected_version} (found {actual_version})"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// How a `load` call resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// The slot held a valid serialized collection.
    Stored,
    /// The slot was empty; the seed set was written into it and returned.
    Seeded,
    /// The slot value failed to decode; the seed set was returned and the
    /// corrupt value left in place.
    Fallback { cause: String },
    /// No storage substrate exists; nothing is read or persisted.
    Detached,
}

impl LoadSource {
    /// Whether the returned collection is a stand-in rather than slot
    /// contents.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Fallback { .. } | Self::Detached)
    }
}

/// A loaded collection plus the way it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub contacts: Vec<Contact>,
    pub source: LoadSource,
}

impl LoadOutcome {
    /// Consumes the outcome, keeping only the records.
    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }
}
