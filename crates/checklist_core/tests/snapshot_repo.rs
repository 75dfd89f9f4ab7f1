use checklist_core::db::migrations::latest_version;
use checklist_core::db::open_db_in_memory;
use checklist_core::{RepoError, SnapshotRepository, SqliteSnapshotRepository, TASKS_STORAGE_KEY};
use rusqlite::Connection;

#[test]
fn load_of_absent_key_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();

    assert!(repo.load(TASKS_STORAGE_KEY).unwrap().is_none());
}

#[test]
fn save_then_load_returns_the_stored_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();

    repo.save(TASKS_STORAGE_KEY, "[]").unwrap();
    assert_eq!(repo.load(TASKS_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn save_overwrites_the_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();

    repo.save(TASKS_STORAGE_KEY, "first").unwrap();
    repo.save(TASKS_STORAGE_KEY, "second").unwrap();
    assert_eq!(
        repo.load(TASKS_STORAGE_KEY).unwrap().as_deref(),
        Some("second")
    );
}

#[test]
fn keys_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::try_new(&conn).unwrap();

    repo.save(TASKS_STORAGE_KEY, "tasks value").unwrap();
    repo.save("other", "other value").unwrap();
    assert_eq!(
        repo.load(TASKS_STORAGE_KEY).unwrap().as_deref(),
        Some("tasks value")
    );
    assert_eq!(repo.load("other").unwrap().as_deref(), Some("other value"));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteSnapshotRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteSnapshotRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("local_store"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE local_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteSnapshotRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "local_store",
            column: "updated_at"
        })
    ));
}
