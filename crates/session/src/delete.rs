use crate::error::Result;
use mnemo_core::Console;
use mnemo_store::{Error as StoreError, Store};

/// Deletes a whole collection, flashcards included. No loop.
pub struct DeleteSession {
    store: Store,
    collection_name: String,
}

impl DeleteSession {
    pub fn new(store: Store, collection_name: impl Into<String>) -> Self {
        Self { store, collection_name: collection_name.into() }
    }

    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        match self.store.delete_collection(&self.collection_name) {
            Ok(()) => {
                console.print(&format!(
                    "Successfully deleted collection '{}'.",
                    self.collection_name
                ));
                Ok(())
            }
            Err(StoreError::CollectionNotFound(_)) => {
                console.print(&format!("The collection '{}' does not exist.", self.collection_name));
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnemo_core::console::ScriptedConsole;
    use mnemo_core::{Answer, Question};
    use mnemo_store::Store;

    #[test]
    fn test_delete_removes_the_collection_and_its_flashcards() {
        let store = Store::open_in_memory().unwrap();
        let mut collection = store.create_collection("Spanish").unwrap();
        collection
            .add_flashcard(Question::new("hola").unwrap(), Answer::new("hello").unwrap())
            .unwrap();

        let mut console = ScriptedConsole::new(&[]);
        DeleteSession::new(store.clone(), "Spanish").run(&mut console).unwrap();

        assert!(console.output_contains("Successfully deleted collection 'Spanish'."));
        assert!(!store.collection_exists("Spanish").unwrap());
    }

    #[test]
    fn test_delete_reports_a_missing_collection() {
        let store = Store::open_in_memory().unwrap();

        let mut console = ScriptedConsole::new(&[]);
        DeleteSession::new(store, "Spanish").run(&mut console).unwrap();

        assert!(console.output_contains("The collection 'Spanish' does not exist."));
    }
}
