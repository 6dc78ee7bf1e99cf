//! Contact store contract, slot-backed SQLite store, and detached
//! stand-in.
//!
//! # Responsibility
//! - Expose the five store operations over durable contact state.
//! - Keep slot encoding/decoding and the degrade policy inside this
//!   module.
//!
//! # Invariants
//! - Every mutation is a full-collection read-modify-write; the slot
//!   value is replaced in a single statement.
//! - `load` never fails on malformed slot data; it degrades to the seed
//!   set and reports the degrade through `LoadSource`.
//! - No field validation happens here; the input boundary rejects bad
//!   drafts before a mutating call is made.

use crate::db::migrations;
use crate::model::contact::{Contact, ContactDraft, ContactGroup, ContactPatch};
use crate::store::{LoadOutcome, LoadSource, StoreError, StoreResult};
use log::{info, warn};
use rusqlite::{params, Connection};

/// Slot key under which the whole contact collection is serialized.
pub const CONTACTS_SLOT_KEY: &str = "contacts";

/// The five store operations over durable contact state.
pub trait ContactStore {
    /// Reads the whole collection, seeding the slot on first use.
    fn load(&self) -> StoreResult<LoadOutcome>;
    /// Appends a record with a freshly minted id and persists the
    /// collection.
    fn create(&self, draft: ContactDraft) -> StoreResult<Contact>;
    /// Merges a patch over the record with `id`. `None` means the id was
    /// absent and nothing was written.
    fn update(&self, id: &str, patch: &ContactPatch) -> StoreResult<Option<Contact>>;
    /// Removes the record with `id`; `true` iff the collection shrank.
    /// Persists only on success.
    fn delete(&self, id: &str) -> StoreResult<bool>;
    /// Looks up one record; `None` means not found.
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Contact>>;
}

/// Fixed sample records written on first use of an empty slot.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: "1".to_string(),
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            group: Some(ContactGroup::Work),
        },
        Contact {
            id: "2".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane.smith@email.com".to_string(),
            phone: Some("+1 (555) 987-6543".to_string()),
            group: Some(ContactGroup::Friends),
        },
        Contact {
            id: "3".to_string(),
            name: "Bob Johnson".to_string(),
            email: "bob.johnson@email.com".to_string(),
            phone: Some("+1 (555) 456-7890".to_string()),
            group: Some(ContactGroup::Family),
        },
        Contact {
            id: "4".to_string(),
            name: "Alice Brown".to_string(),
            email: "alice.brown@email.com".to_string(),
            phone: None,
            group: Some(ContactGroup::Work),
        },
        Contact {
            id: "5".to_string(),
            name: "Charlie Wilson".to_string(),
            email: "charlie.wilson@email.com".to_string(),
            phone: Some("+1 (555) 321-6547".to_string()),
            group: Some(ContactGroup::Friends),
        },
    ]
}

/// Slot-backed store over a migrated SQLite connection.
pub struct SqliteContactStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactStore<'conn> {
    /// Constructs a store from a migrated, ready connection.
    ///
    /// Rejects connections whose schema version or slot table shape does
    /// not match this build, so a store never operates on a substrate it
    /// does not understand.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }

    fn read_slot(&self) -> StoreResult<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM slots WHERE key = ?1;")?;
        let mut rows = stmt.query([CONTACTS_SLOT_KEY])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }
        Ok(None)
    }

    fn write_slot(&self, contacts: &[Contact]) -> StoreResult<()> {
        let value = serde_json::to_string(contacts)?;
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![CONTACTS_SLOT_KEY, value],
        )?;
        Ok(())
    }
}

impl ContactStore for SqliteContactStore<'_> {
    fn load(&self) -> StoreResult<LoadOutcome> {
        let Some(raw) = self.read_slot()? else {
            let seeds = seed_contacts();
            self.write_slot(&seeds)?;
            info!(
                "event=slot_load module=store status=seeded count={}",
                seeds.len()
            );
            return Ok(LoadOutcome {
                contacts: seeds,
                source: LoadSource::Seeded,
            });
        };

        match serde_json::from_str::<Vec<Contact>>(&raw) {
            Ok(contacts) => Ok(LoadOutcome {
                contacts,
                source: LoadSource::Stored,
            }),
            Err(err) => {
                warn!("event=slot_load module=store status=fallback error={err}");
                Ok(LoadOutcome {
                    contacts: seed_contacts(),
                    source: LoadSource::Fallback {
                        cause: err.to_string(),
                    },
                })
            }
        }
    }

    fn create(&self, draft: ContactDraft) -> StoreResult<Contact> {
        let mut contacts = self.load()?.into_contacts();
        let contact = Contact::new(draft);
        contacts.push(contact.clone());
        self.write_slot(&contacts)?;
        Ok(contact)
    }

    fn update(&self, id: &str, patch: &ContactPatch) -> StoreResult<Option<Contact>> {
        let mut contacts = self.load()?.into_contacts();
        let Some(target) = contacts.iter_mut().find(|contact| contact.id == id) else {
            return Ok(None);
        };

        target.apply_patch(patch);
        let updated = target.clone();
        self.write_slot(&contacts)?;
        Ok(Some(updated))
    }

    fn delete(&self, id: &str) -> StoreResult<bool> {
        let mut contacts = self.load()?.into_contacts();
        let before = contacts.len();
        contacts.retain(|contact| contact.id != id);
        if contacts.len() == before {
            return Ok(false);
        }

        self.write_slot(&contacts)?;
        Ok(true)
    }

    fn find_by_id(&self, id: &str) -> StoreResult<Option<Contact>> {
        let contacts = self.load()?.into_contacts();
        Ok(contacts.into_iter().find(|contact| contact.id == id))
    }
}

/// Environment-guard store used when no storage substrate exists.
///
/// Reads come back empty, persists are no-ops, and `create` still hands
/// out a minted record that simply never survives the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedContactStore;

impl DetachedContactStore {
    pub fn new() -> Self {
        Self
    }
}

impl ContactStore for DetachedContactStore {
    fn load(&self) -> StoreResult<LoadOutcome> {
        Ok(LoadOutcome {
            contacts: Vec::new(),
            source: LoadSource::Detached,
        })
    }

    fn create(&self, draft: ContactDraft) -> StoreResult<Contact> {
        Ok(Contact::new(draft))
    }

    fn update(&self, _id: &str, _patch: &ContactPatch) -> StoreResult<Option<Contact>> {
        Ok(None)
    }

    fn delete(&self, _id: &str) -> StoreResult<bool> {
        Ok(false)
    }

    fn find_by_id(&self, _id: &str) -> StoreResult<Option<Contact>> {
        Ok(None)
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "slots")? {
        return Err(StoreError::MissingRequiredTable("slots"));
    }

    for column in ["key", "value", "updated_at"] {
        if !table_has_column(conn, "slots", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "slots",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
