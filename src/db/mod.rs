//! Read-only SQLite access to the employee events database.
//!
//! The database is owned by an external loader; this layer only reads it.
//! Every logical query opens its own connection through [`DbSource`] and
//! drops it before returning, so no connection outlives a single query.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags, Params, Row};

pub mod types;
pub use types::*;

/// Location of the events database. Cheap to clone; holds no connection.
#[derive(Debug, Clone)]
pub struct DbSource {
    path: PathBuf,
}

impl DbSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh read-only connection for one logical query.
    pub fn open(&self) -> Result<ReportDb, DbError> {
        ReportDb::open_readonly_at(&self.path)
    }
}

pub struct ReportDb {
    conn: Connection,
}

impl ReportDb {
    /// Borrow the underlying connection for ad-hoc queries.
    pub fn conn_ref(&self) -> &Connection {
        &self.conn
    }

    /// Open a database at an explicit path in read-only mode.
    ///
    /// A missing file is reported as `DbError::NotFound` instead of letting
    /// SQLite fail later with a less specific "unable to open" error.
    pub fn open_readonly_at(path: &Path) -> Result<Self, DbError> {
        if !path.exists() {
            return Err(DbError::NotFound(path.to_path_buf()));
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Run a parameterized query and map each row with `f`.
    pub fn query_rows<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Vec<T>, DbError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let mapped = stmt.query_map(params, f)?;
        let mut items = Vec::new();
        for row in mapped {
            items.push(row?);
        }
        Ok(items)
    }

    /// Run a parameterized query and collect every column as `f64`.
    pub fn query_table<P: Params>(&self, sql: &str, params: P) -> Result<FeatureTable, DbError> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
        let width = columns.len();
        let mut table = FeatureTable::new(columns);

        let mut rows = stmt.query(params)?;
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(width);
            for idx in 0..width {
                let value: Option<f64> = row.get(idx)?;
                values.push(value.unwrap_or(0.0));
            }
            table.rows.push(values);
        }
        Ok(table)
    }
}

#[cfg(test)]
pub(crate) mod fixtures;
