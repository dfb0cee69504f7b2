use lifeos_core::db::migrations::latest_version;
use lifeos_core::db::{open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn fresh_database_is_migrated_to_the_latest_version() {
    let conn = open_db_in_memory().unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let tables: u32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'snapshots';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);
}

#[test]
fn migrating_an_up_to_date_database_is_a_no_op() {
    let mut conn = open_db_in_memory().unwrap();
    lifeos_core::db::migrations::apply_migrations(&mut conn).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn a_database_from_the_future_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.pragma_update(None, "user_version", latest_version() + 1)
        .unwrap();

    let result = lifeos_core::db::migrations::apply_migrations(&mut conn);
    assert!(matches!(
        result,
        Err(DbError::UnsupportedSchemaVersion { .. })
    ));
}

#[test]
fn snapshot_row_is_keyed_to_a_single_id() {
    let conn = open_db_in_memory().unwrap();

    conn.execute(
        "INSERT INTO snapshots (id, version, payload, saved_at)
         VALUES (1, 1, '{}', '2024-01-01T09:00:00Z');",
        [],
    )
    .unwrap();

    let second = conn.execute(
        "INSERT INTO snapshots (id, version, payload, saved_at)
         VALUES (2, 1, '{}', '2024-01-01T09:00:00Z');",
        [],
    );
    assert!(second.is_err());
}
