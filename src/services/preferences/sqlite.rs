use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use super::PreferenceStore;
use crate::services::database::Database;

/// Preferences stored in the `preferences` table of a [`Database`].
pub struct SqlitePreferenceStore<'a> {
    db: &'a Database,
}

impl<'a> SqlitePreferenceStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }
}

impl PreferenceStore for SqlitePreferenceStore<'_> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.db
            .connection()
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .context(format!("Failed to load preference '{}'", key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                 updated_at = CURRENT_TIMESTAMP",
                (key, value),
            )
            .context(format!("Failed to save preference '{}'", key))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_db() -> Database {
        let db = Database::new(":memory:").unwrap();
        db.initialize_schema().unwrap();
        db
    }

    #[test]
    fn test_get_missing_key() {
        let db = setup_test_db();
        let store = SqlitePreferenceStore::new(&db);
        assert_eq!(store.get("lang").unwrap(), None);
    }

    #[test]
    fn test_set_then_overwrite() {
        let db = setup_test_db();
        let store = SqlitePreferenceStore::new(&db);

        store.set("lang", "es").unwrap();
        assert_eq!(store.get("lang").unwrap().as_deref(), Some("es"));

        store.set("lang", "pt").unwrap();
        assert_eq!(store.get("lang").unwrap().as_deref(), Some("pt"));
    }

    #[test]
    fn test_missing_schema_is_an_error() {
        let db = Database::new(":memory:").unwrap();
        let store = SqlitePreferenceStore::new(&db);
        assert!(store.get("lang").is_err());
    }
}
