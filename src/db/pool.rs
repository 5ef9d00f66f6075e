//! Owned SQLite handle (lightweight for CLI usage).
//!
//! One `DbPool` is opened per command and passed by `&mut` to the logic
//! that needs it. The connection is released when the value is dropped,
//! or earlier through [`DbPool::close`].

use crate::db::initialize::init_db;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, Transaction};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database at `path` and bring the schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory store with the full schema.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Run `func` as one unit of work.
    ///
    /// Commits when `func` succeeds. On error the transaction is dropped,
    /// which rolls it back.
    pub fn with_transaction<F, T>(&mut self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> AppResult<T>,
    {
        let tx = self.conn.transaction()?;
        let out = func(&tx)?;
        tx.commit()?;
        Ok(out)
    }

    /// Close explicitly, surfacing any error SQLite reports on close.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| AppError::Db(e))
    }
}
