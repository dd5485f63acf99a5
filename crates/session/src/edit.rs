use crate::error::Result;
use crate::prompts;
use mnemo_core::{Answer, Console, Question};
use mnemo_store::{Collection, Error as StoreError};
use tracing::debug;

/// Adds, edits or deletes flashcards in one collection
///
/// The top-level menu picks one of the three sub-flows; a freshly
/// created collection skips the menu and goes straight to adding.
pub struct EditSession {
    collection: Collection,
    just_created: bool,
}

impl EditSession {
    pub fn new(collection: Collection) -> Self {
        Self { collection, just_created: false }
    }

    /// Entry used by the create flow: no menu, straight to Add.
    pub(crate) fn for_new_collection(collection: Collection) -> Self {
        Self { collection, just_created: true }
    }

    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        let action = if self.just_created {
            String::from("add")
        } else {
            let Some(action) = prompts::prompt_or_decline(
                console,
                "What do you want to do, add a flashcard, edit an existing one or delete one?",
                &["add", "edit", "delete"],
            )?
            else {
                return Ok(());
            };
            action
        };

        debug!("edit session on {:?}: {action}", self.collection.name());
        match action.as_str() {
            "add" => self.add_loop(console),
            "edit" => self.edit_loop(console),
            _ => self.delete_loop(console),
        }
    }

    fn add_loop(&mut self, console: &mut dyn Console) -> Result<()> {
        loop {
            let Some(question) = prompts::prompt_or_decline(console, "What's the question?", &[])? else {
                return Ok(());
            };
            let Some(answer) = prompts::prompt_or_decline(console, "And what's the answer?", &[])? else {
                return Ok(());
            };

            let again = match self
                .collection
                .add_flashcard(Question::new(question)?, Answer::new(answer)?)
            {
                Ok(()) => "Added a new flashcard. Want to add another one?",
                Err(StoreError::DuplicateQuestion(question)) => {
                    console.print(&format!("A flashcard with the question '{question}' already exists."));
                    "Want to add another one?"
                }
                Err(e) => return Err(e.into()),
            };
            if !prompts::yes_no_or_decline(console, again)? {
                return Ok(());
            }
        }
    }

    fn delete_loop(&mut self, console: &mut dyn Console) -> Result<()> {
        if self.collection.is_empty() {
            console.print(&format!(
                "The collection '{}' has no flashcards to delete.",
                self.collection.name()
            ));
            return Ok(());
        }
        self.list_flashcards(console);
        loop {
            let Some(id) = prompts::choose_flashcard_id(console, &self.collection)? else {
                return Ok(());
            };
            self.collection.delete_flashcard(id)?;
            console.print(&format!("Deleted flashcard {id}."));

            if self.collection.is_empty() {
                console.print("The collection has no flashcards left.");
                return Ok(());
            }
            if !prompts::yes_no_or_decline(console, "Want to delete another one?")? {
                return Ok(());
            }
        }
    }

    fn edit_loop(&mut self, console: &mut dyn Console) -> Result<()> {
        if self.collection.is_empty() {
            console.print(&format!(
                "The collection '{}' has no flashcards to edit.",
                self.collection.name()
            ));
            return Ok(());
        }
        self.list_flashcards(console);
        loop {
            let Some(id) = prompts::choose_flashcard_id(console, &self.collection)? else {
                return Ok(());
            };
            self.edit_flashcard(console, id)?;

            if !prompts::yes_no_or_decline(console, "Want to edit another one?")? {
                return Ok(());
            }
        }
    }

    fn edit_flashcard(&mut self, console: &mut dyn Console, id: i64) -> Result<()> {
        let Some(field) = prompts::prompt_or_decline(
            console,
            "What do you want to change, the question, the answer or both?",
            &["question", "answer", "both"],
        )?
        else {
            return Ok(());
        };

        let question = if field == "question" || field == "both" {
            match prompts::prompt_or_decline(console, "What's the new question?", &[])? {
                Some(text) => Some(Question::new(text)?),
                None => return Ok(()),
            }
        } else {
            None
        };
        let answer = if field == "answer" || field == "both" {
            match prompts::prompt_or_decline(console, "And what's the new answer?", &[])? {
                Some(text) => Some(Answer::new(text)?),
                None => return Ok(()),
            }
        } else {
            None
        };

        match self.collection.edit_flashcard(id, question, answer) {
            Ok(()) => {
                console.print(&format!("Updated flashcard {id}."));
                Ok(())
            }
            Err(StoreError::DuplicateQuestion(question)) => {
                console.print(&format!("A flashcard with the question '{question}' already exists."));
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list_flashcards(&self, console: &mut dyn Console) {
        for flashcard in self.collection.flashcards() {
            console.print(&flashcard.to_string());
        }
    }
}
