use crate::edit::EditSession;
use crate::error::Result;
use mnemo_core::Console;
use mnemo_store::{Error as StoreError, Store};
use tracing::debug;

/// Creates a collection, then hands off to the edit flow so the user can
/// fill it straight away
pub struct CreateSession {
    store: Store,
    collection_name: String,
}

impl CreateSession {
    pub fn new(store: Store, collection_name: impl Into<String>) -> Self {
        Self { store, collection_name: collection_name.into() }
    }

    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        let collection = match self.store.create_collection(&self.collection_name) {
            Ok(collection) => collection,
            Err(StoreError::CollectionAlreadyExists(_)) => {
                console.print(&format!("The collection '{}' already exists.", self.collection_name));
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        console.print(&format!(
            "New collection '{}' successfully created.",
            self.collection_name
        ));

        debug!("collection {:?} created, entering add flow", self.collection_name);
        EditSession::for_new_collection(collection).run(console)
    }
}
