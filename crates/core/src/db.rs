//! Shared SQLite handle.
//!
//! The customer and review stores operate on the same database so the
//! foreign key from review to customer is enforceable. Both stores hold
//! an `Arc<Db>` and lock the connection per operation.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use thiserror::Error;

/// Errors opening or initializing the database.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlite(String),
}

/// SQLite database handle shared by the stores.
pub struct Db {
    conn: Mutex<Connection>,
}

impl Db {
    /// Open the database file, creating it and the tables if needed.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path).map_err(|e| DbError::Sqlite(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (useful for testing).
    pub fn in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory().map_err(|e| DbError::Sqlite(e.to_string()))?;
        Self::initialize_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), DbError> {
        conn.execute_batch(
            r#"
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS customer (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL,
                phone TEXT,
                created_at TEXT NOT NULL
            );

            CREATE UNIQUE INDEX IF NOT EXISTS idx_customer_email ON customer(email);

            -- Reviews reference their owning customer; deleting a customer
            -- that still owns reviews is restricted by the foreign key.
            CREATE TABLE IF NOT EXISTS review (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                text TEXT NOT NULL,
                sentiment TEXT NOT NULL,
                customer_id INTEGER NOT NULL REFERENCES customer(id),
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_review_sentiment ON review(sentiment);
            CREATE INDEX IF NOT EXISTS idx_review_customer ON review(customer_id);
            "#,
        )
        .map_err(|e| DbError::Sqlite(e.to_string()))?;

        Ok(())
    }

    pub(crate) fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }
}
