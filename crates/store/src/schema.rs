//! SQLite schema for the flashcard store

/// SQL to create the complete schema
///
/// Safe to re-run against an existing, populated database: every
/// statement is `CREATE ... IF NOT EXISTS`.
pub const SCHEMA_SQL: &str = include_str!("schema.sql");

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_applies_to_fresh_database() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA_SQL).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert!(tables.contains(&"collections".to_string()));
        assert!(tables.contains(&"flashcards".to_string()));
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(SCHEMA_SQL).unwrap();
        conn.execute("INSERT INTO collections (name) VALUES ('Spanish')", []).unwrap();

        conn.execute_batch(SCHEMA_SQL).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM collections", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}
