//! SQLite-backed weigh-in storage.
//!
//! One row per calendar day, keyed by ISO date so that lexicographic
//! order matches chronological order. Recording a second weigh-in for a
//! day replaces the first; the engine therefore always receives an
//! ordered, de-duplicated series.

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::error::{Result, StoreError};
use crate::observation::WeighIn;

use super::data_dir;

/// SQLite database holding the weigh-in history.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `~/.config/trendscale/trendscale.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        let path = data_dir()?.join("trendscale.db");
        Ok(Self::open_at(&path)?)
    }

    /// Open (or create) a database at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open_at(path: &std::path::Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database, used by tests.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::OpenFailed {
            path: ":memory:".into(),
            source,
        })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS weigh_ins (
                    date      TEXT PRIMARY KEY,
                    weight_kg REAL NOT NULL,
                    note      TEXT
                );",
            )
            .map_err(|e| StoreError::MigrationFailed(e.to_string()))
    }

    /// Record a weigh-in, replacing any existing entry for the same day.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub fn upsert(&self, weigh_in: &WeighIn) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO weigh_ins (date, weight_kg, note) VALUES (?1, ?2, ?3)",
            params![
                weigh_in.date.to_string(),
                weigh_in.weight_kg,
                weigh_in.note,
            ],
        )?;
        Ok(())
    }

    /// All weigh-ins in ascending date order.
    pub fn list(&self) -> Result<Vec<WeighIn>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, weight_kg, note FROM weigh_ins ORDER BY date ASC")?;
        let rows = stmt.query_map([], Self::row_to_weigh_in)?;

        let mut weigh_ins = Vec::new();
        for row in rows {
            weigh_ins.push(row?);
        }
        Ok(weigh_ins)
    }

    /// Fetch the weigh-in for a specific day, if any.
    pub fn get(&self, date: NaiveDate) -> Result<Option<WeighIn>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT date, weight_kg, note FROM weigh_ins WHERE date = ?1")?;
        let result = stmt.query_row(params![date.to_string()], Self::row_to_weigh_in);
        match result {
            Ok(weigh_in) => Ok(Some(weigh_in)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete the weigh-in for a day. Returns true if a row was removed.
    pub fn delete(&self, date: NaiveDate) -> Result<bool, StoreError> {
        let changed = self.conn.execute(
            "DELETE FROM weigh_ins WHERE date = ?1",
            params![date.to_string()],
        )?;
        Ok(changed > 0)
    }

    /// Number of recorded weigh-ins.
    pub fn count(&self) -> Result<u64, StoreError> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM weigh_ins", [], |row| {
                row.get::<_, u64>(0)
            })?;
        Ok(count)
    }

    fn row_to_weigh_in(row: &rusqlite::Row<'_>) -> rusqlite::Result<WeighIn> {
        let date_str: String = row.get(0)?;
        let date = date_str.parse::<NaiveDate>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?;
        Ok(WeighIn {
            date,
            weight_kg: row.get(1)?,
            note: row.get(2)?,
        })
    }
}
