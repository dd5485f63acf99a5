//! Store operations: durable CRUD for collections and flashcards
//!
//! The store owns the single SQLite connection and is the single source
//! of truth. Every write that spans more than one statement runs inside
//! one transaction; no transaction spans multiple calls.

use crate::collection::{AttemptHistory, Collection, Flashcard};
use crate::error::{Error, Result};
use crate::schema::SCHEMA_SQL;
use mnemo_core::{Answer, Question};
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;
use std::rc::Rc;
use tracing::debug;

/// A handle to the flashcard store backed by SQLite
///
/// Cloning is cheap: clones share one connection. Hydrated
/// [`Collection`]s carry a clone and route every mutation back through
/// it, so in-memory and persisted state stay consistent within a
/// session.
#[derive(Clone)]
pub struct Store {
    conn: Rc<Connection>,
}

impl Store {
    /// Open or create the database at the given path and bootstrap the
    /// schema. The bootstrap is idempotent against a populated database.
    pub fn open(db_path: &Path) -> Result<Self> {
        debug!("opening store at {}", db_path.display());

        if let Some(dir) = db_path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)
                .map_err(|e| Error::unavailable(format!("cannot create {}: {e}", dir.display())))?;
        }
        let conn = Connection::open(db_path)
            .map_err(|e| Error::unavailable(format!("cannot open {}: {e}", db_path.display())))?;
        Self::bootstrap(conn)
    }

    /// Open an in-memory store.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::unavailable(format!("cannot open in-memory database: {e}")))?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")
            .and_then(|_| conn.execute_batch(SCHEMA_SQL))
            .map_err(|e| Error::unavailable(format!("schema bootstrap failed: {e}")))?;
        Ok(Self { conn: Rc::new(conn) })
    }

    /// Whether a collection with this name exists.
    pub fn collection_exists(&self, name: &str) -> Result<bool> {
        Ok(self.collection_id(name)?.is_some())
    }

    fn collection_id(&self, name: &str) -> Result<Option<i64>> {
        let id = self
            .conn
            .query_row("SELECT id FROM collections WHERE name = ?1", params![name], |row| row.get(0))
            .optional()?;
        Ok(id)
    }

    /// Create an empty collection. The name must be unused.
    pub fn create_collection(&self, name: &str) -> Result<Collection> {
        let tx = self.conn.unchecked_transaction()?;
        let taken: Option<i64> = tx
            .query_row("SELECT id FROM collections WHERE name = ?1", params![name], |row| row.get(0))
            .optional()?;
        if taken.is_some() {
            return Err(Error::CollectionAlreadyExists(name.to_string()));
        }
        tx.execute("INSERT INTO collections (name) VALUES (?1)", params![name])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!("created collection {name:?} with id {id}");
        Ok(Collection::new(id, name, Vec::new(), self.clone()))
    }

    /// Load a collection and all its flashcards, ordered by ascending id.
    pub fn get_collection(&self, name: &str) -> Result<Collection> {
        let id = self
            .collection_id(name)?
            .ok_or_else(|| Error::CollectionNotFound(name.to_string()))?;

        let mut stmt = self.conn.prepare(
            "SELECT id, question, answer, successful_attempts, failed_attempts
             FROM flashcards WHERE collection_id = ?1 ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i64>(4)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut flashcards = Vec::with_capacity(rows.len());
        for (card_id, question, answer, successes, failures) in rows {
            flashcards.push(Flashcard::new(
                card_id,
                Question::new(question)?,
                Answer::new(answer)?,
                AttemptHistory::new(card_id, successes, failures, self.clone()),
            ));
        }
        Ok(Collection::new(id, name, flashcards, self.clone()))
    }

    /// Delete a collection and every flashcard in it, atomically.
    pub fn delete_collection(&self, name: &str) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let id: Option<i64> = tx
            .query_row("SELECT id FROM collections WHERE name = ?1", params![name], |row| row.get(0))
            .optional()?;
        let Some(id) = id else {
            return Err(Error::CollectionNotFound(name.to_string()));
        };
        tx.execute("DELETE FROM flashcards WHERE collection_id = ?1", params![id])?;
        tx.execute("DELETE FROM collections WHERE id = ?1", params![id])?;
        tx.commit()?;

        debug!("deleted collection {name:?}");
        Ok(())
    }

    /// Insert a flashcard with zeroed attempt counters.
    ///
    /// The question text must be unique across the entire store, not
    /// just within the collection. The check and the insert run in one
    /// transaction; a duplicate leaves the store untouched.
    pub fn add_flashcard(&self, collection_id: i64, question: &Question, answer: &Answer) -> Result<Flashcard> {
        let tx = self.conn.unchecked_transaction()?;
        let duplicate: Option<i64> = tx
            .query_row(
                "SELECT id FROM flashcards WHERE question = ?1",
                params![question.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        if duplicate.is_some() {
            return Err(Error::DuplicateQuestion(question.as_str().to_string()));
        }
        tx.execute(
            "INSERT INTO flashcards (collection_id, question, answer) VALUES (?1, ?2, ?3)",
            params![collection_id, question.as_str(), answer.as_str()],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!("added flashcard {id} to collection {collection_id}");
        Ok(Flashcard::new(
            id,
            question.clone(),
            answer.clone(),
            AttemptHistory::new(id, 0, 0, self.clone()),
        ))
    }

    /// Remove a flashcard. Removing an absent id is not an error.
    pub fn delete_flashcard(&self, flashcard_id: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM flashcards WHERE id = ?1", params![flashcard_id])?;
        debug!("deleted flashcard {flashcard_id}");
        Ok(())
    }

    /// Update the supplied field(s) of a flashcard. Both `None` is a
    /// no-op. A new question equal to another card's question is
    /// rejected, keeping the store-wide uniqueness invariant.
    pub fn edit_flashcard(
        &self,
        flashcard_id: i64,
        question: Option<&Question>,
        answer: Option<&Answer>,
    ) -> Result<()> {
        if question.is_none() && answer.is_none() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        if let Some(question) = question {
            let duplicate: Option<i64> = tx
                .query_row(
                    "SELECT id FROM flashcards WHERE question = ?1 AND id != ?2",
                    params![question.as_str(), flashcard_id],
                    |row| row.get(0),
                )
                .optional()?;
            if duplicate.is_some() {
                return Err(Error::DuplicateQuestion(question.as_str().to_string()));
            }
            tx.execute(
                "UPDATE flashcards SET question = ?1 WHERE id = ?2",
                params![question.as_str(), flashcard_id],
            )?;
        }
        if let Some(answer) = answer {
            tx.execute(
                "UPDATE flashcards SET answer = ?1 WHERE id = ?2",
                params![answer.as_str(), flashcard_id],
            )?;
        }
        tx.commit()?;

        debug!("edited flashcard {flashcard_id}");
        Ok(())
    }

    /// Count one successful attempt for a flashcard.
    pub fn record_success(&self, flashcard_id: i64) -> Result<()> {
        self.conn.execute(
            "UPDATE flashcards SET successful_attempts = successful_attempts + 1 WHERE id = ?1",
            params![flashcard_id],
        )?;
        Ok(())
    }

    /// Count one failed attempt for a flashcard.
    pub fn record_failure(&self, flashcard_id: i64) -> Result<()> {
        self.conn.execute(
            "UPDATE flashcards SET failed_attempts = failed_attempts + 1 WHERE id = ?1",
            params![flashcard_id],
        )?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn count_flashcards(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM flashcards", [], |row| row.get(0))?;
        Ok(count)
    }
}
