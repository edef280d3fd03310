pub mod entities;
pub mod migrations;
pub mod records;

pub use records::{Filter, Record, RecordManager};

use crate::error::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

pub type DbConnection = Arc<Mutex<Connection>>;

/// Handle to the record database, cloned into every worker
///
/// Requests call [`Store::acquire`] once and hold the returned guard for the
/// duration of the handler; the guard is the per-request store handle a
/// [`RecordManager`] borrows.
#[derive(Clone)]
pub struct Store {
    connection: DbConnection,
}

impl Store {
    pub fn open(db_path: &Path) -> AppResult<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> AppResult<Self> {
        if !migrations::has_record_schema(&conn)? {
            info!("No record tables found, creating schema");
        }
        migrations::run_migrations(&mut conn)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn acquire(&self) -> AppResult<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|e| AppError::Internal(format!("Failed to acquire database lock: {e}")))
    }
}
