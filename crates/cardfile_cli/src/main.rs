//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `cardfile_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use cardfile_core::{open_db_in_memory, ContactService, SqliteContactStore, ViewState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cardfile_core version={}", cardfile_core::core_version());

    let conn = open_db_in_memory()?;
    let store = SqliteContactStore::try_new(&conn)?;
    let service = ContactService::open(store)?;

    println!("load_source={:?}", service.load_source());
    for contact in service.visible_contacts(&ViewState::default()) {
        println!(
            "contact id={} name={} group={}",
            contact.id,
            contact.name,
            contact.group.map_or("none", |group| group.label())
        );
    }
    Ok(())
}
