//! Flashcard persistence backed by SQLite
//!
//! Provides durable storage for named flashcard collections and the
//! hydrated entities the session flows work with.
//!
//! # Example
//!
//! ```ignore
//! use mnemo_core::{Answer, Question};
//! use mnemo_store::Store;
//!
//! let store = Store::open(&db_path)?;
//! let mut collection = store.create_collection("Spanish")?;
//! collection.add_flashcard(Question::new("hola")?, Answer::new("hello")?)?;
//!
//! for flashcard in store.get_collection("Spanish")?.flashcards() {
//!     println!("{flashcard}");
//! }
//! ```

mod collection;
mod error;
mod schema;
mod store;

pub use collection::{AttemptHistory, Collection, Flashcard};
pub use error::{Error, Result};
pub use store::Store;
