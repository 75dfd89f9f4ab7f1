//! Snapshot repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist one opaque serialized value per storage key.
//! - Validate connection readiness before accepting reads/writes.
//!
//! # Invariants
//! - `save` overwrites the full value for a key (write-through semantics).
//! - Readiness checks run once at construction, not per operation.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

const SNAPSHOT_TABLE: &str = "local_store";
const REQUIRED_COLUMNS: &[&str] = &["key", "value", "updated_at"];

/// Fixed storage key under which the checklist keeps its task list.
pub const TASKS_STORAGE_KEY: &str = "tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for snapshot persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
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

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
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

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value persistence contract for serialized snapshots.
///
/// The list store treats implementations as a write-through mirror: values
/// are read once at startup and overwritten whole on every change.
pub trait SnapshotRepository {
    /// Returns the stored value for `key`, or `None` when absent.
    fn load(&self, key: &str) -> RepoResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed snapshot repository over the `local_store` table.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when no migration has ever been applied.
    /// - `MissingRequiredTable` / `MissingRequiredColumn` when the schema
    ///   does not carry the snapshot table this repository needs.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn load(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn save(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO local_store (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version == 0 {
        return Err(RepoError::UninitializedConnection {
            expected_version: latest_version(),
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [SNAPSHOT_TABLE],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable(SNAPSHOT_TABLE));
    }

    for column in REQUIRED_COLUMNS.iter().copied() {
        let column_exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM pragma_table_info(?1)
                WHERE name = ?2
            );",
            params![SNAPSHOT_TABLE, column],
            |row| row.get(0),
        )?;
        if column_exists == 0 {
            return Err(RepoError::MissingRequiredColumn {
                table: SNAPSHOT_TABLE,
                column,
            });
        }
    }

    Ok(())
}
