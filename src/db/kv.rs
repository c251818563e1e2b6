//! Key-value repository

use rusqlite::OptionalExtension;

use super::DbPool;
use crate::{Error, Result};

/// String key to string value records
#[derive(Clone)]
pub struct KvRepo {
    pool: DbPool,
}

impl KvRepo {
    /// Create a new key-value repository
    #[must_use]
    pub const fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns error if database operation fails
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.pool.get().map_err(|e| Error::Database(e.to_string()))?;

        let value = conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;

        Ok(value)
    }

    /// Insert or replace a value
    ///
    /// # Errors
    ///
    /// Returns error if database operation fails
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.pool.get().map_err(|e| Error::Database(e.to_string()))?;

        conn.execute(
            r"
            INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            ",
            [key, value],
        )?;

        tracing::debug!(key, "kv record written");
        Ok(())
    }

    /// Remove a value
    ///
    /// Returns whether a record existed
    ///
    /// # Errors
    ///
    /// Returns error if database operation fails
    pub fn remove(&self, key: &str) -> Result<bool> {
        let conn = self.pool.get().map_err(|e| Error::Database(e.to_string()))?;

        let rows = conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;

        if rows > 0 {
            tracing::debug!(key, "kv record removed");
        }

        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory;

    #[test]
    fn test_set_get_remove() {
        let repo = KvRepo::new(init_memory().unwrap());

        assert_eq!(repo.get("k").unwrap(), None);

        repo.set("k", "one").unwrap();
        assert_eq!(repo.get("k").unwrap().as_deref(), Some("one"));

        repo.set("k", "two").unwrap();
        assert_eq!(repo.get("k").unwrap().as_deref(), Some("two"));

        assert!(repo.remove("k").unwrap());
        assert!(!repo.remove("k").unwrap());
        assert_eq!(repo.get("k").unwrap(), None);
    }
}
