//! Versioned state snapshot persistence.
//!
//! # Responsibility
//! - Serialize the whole `AppState` to one JSON payload row and read it
//!   back, tagged with a storage version for future migration logic.
//!
//! # Invariants
//! - A payload written by a newer storage version is rejected, never
//!   half-parsed.
//! - Saving is best-effort: a failed save returns an error but leaves the
//!   previous snapshot intact.

use crate::db::DbError;
use crate::store::AppState;
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Current snapshot payload version.
pub const STORAGE_VERSION: u32 = 2;

pub type SnapshotResult<T> = Result<T, SnapshotError>;

#[derive(Debug)]
pub enum SnapshotError {
    Db(DbError),
    Serde(serde_json::Error),
    UnsupportedVersion { stored: u32, supported: u32 },
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "snapshot payload error: {err}"),
            Self::UnsupportedVersion { stored, supported } => write!(
                f,
                "snapshot version {stored} is newer than supported {supported}"
            ),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::UnsupportedVersion { .. } => None,
        }
    }
}

impl From<DbError> for SnapshotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SnapshotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Persistence contract for the state blob.
pub trait SnapshotRepository {
    /// Writes the current state, replacing any previous snapshot.
    fn save(&self, state: &AppState, saved_at: &str) -> SnapshotResult<()>;

    /// Reads the last saved state; `None` when nothing was ever saved.
    fn load(&self) -> SnapshotResult<Option<AppState>>;
}

/// SQLite-backed snapshot storage over a single keyed row.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotRepository for SqliteSnapshotRepository<'_> {
    fn save(&self, state: &AppState, saved_at: &str) -> SnapshotResult<()> {
        let payload = serde_json::to_string(state)?;

        self.conn.execute(
            "INSERT INTO snapshots (id, version, payload, saved_at)
             VALUES (1, ?1, ?2, ?3)
             ON CONFLICT (id) DO UPDATE SET
                version = excluded.version,
                payload = excluded.payload,
                saved_at = excluded.saved_at;",
            params![STORAGE_VERSION, payload, saved_at],
        )?;

        info!(
            "event=snapshot_save module=snapshot status=ok version={} bytes={}",
            STORAGE_VERSION,
            payload.len()
        );
        Ok(())
    }

    fn load(&self) -> SnapshotResult<Option<AppState>> {
        let row: Option<(u32, String)> = self
            .conn
            .query_row(
                "SELECT version, payload FROM snapshots WHERE id = 1;",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((version, payload)) = row else {
            return Ok(None);
        };

        if version > STORAGE_VERSION {
            warn!(
                "event=snapshot_load module=snapshot status=error stored_version={} supported={}",
                version, STORAGE_VERSION
            );
            return Err(SnapshotError::UnsupportedVersion {
                stored: version,
                supported: STORAGE_VERSION,
            });
        }

        let state: AppState = serde_json::from_str(&payload)?;
        info!(
            "event=snapshot_load module=snapshot status=ok version={}",
            version
        );
        Ok(Some(state))
    }
}
