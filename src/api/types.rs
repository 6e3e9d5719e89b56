//! Shared state for the advisor API layer.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::advisor::{DiseaseCatalog, PatientDirectory, SqliteDiseaseCatalog, SqlitePatientDirectory};
use crate::api::error::ApiError;
use crate::db::sqlite::open_database;

// ═══════════════════════════════════════════════════════════
// Database handle
// ═══════════════════════════════════════════════════════════

/// Where request handlers get their SQLite connection.
#[derive(Clone)]
pub enum DatabaseHandle {
    /// One connection per request, opened from this path.
    File(PathBuf),
    /// A single connection shared behind a lock (in-memory databases).
    Shared(Arc<Mutex<Connection>>),
}

// ═══════════════════════════════════════════════════════════
// API context
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub db: DatabaseHandle,
    pub catalog: Arc<dyn DiseaseCatalog>,
    pub directory: Arc<dyn PatientDirectory>,
}

impl ApiContext {
    /// SQLite-backed context reading from `db`.
    pub fn new(db: DatabaseHandle) -> Self {
        Self {
            db,
            catalog: Arc::new(SqliteDiseaseCatalog),
            directory: Arc::new(SqlitePatientDirectory),
        }
    }

    pub fn shared(conn: Connection) -> Self {
        Self::new(DatabaseHandle::Shared(Arc::new(Mutex::new(conn))))
    }

    /// Run synchronous database work with a connection.
    pub fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        match &self.db {
            DatabaseHandle::File(path) => {
                let conn = open_database(path)?;
                f(&conn)
            }
            DatabaseHandle::Shared(conn) => {
                let guard = conn
                    .lock()
                    .map_err(|_| ApiError::Internal("database lock poisoned".into()))?;
                f(&*guard)
            }
        }
    }
}
