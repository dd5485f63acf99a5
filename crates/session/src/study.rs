use crate::error::Result;
use crate::prompts;
use mnemo_core::Console;
use mnemo_store::Collection;
use tracing::debug;

/// Runs through every flashcard in a collection, checking typed answers
/// and recording each success or failure
///
/// Recording is fixed at construction; with `record_results` off the
/// session is a practice run that leaves the counters untouched.
pub struct StudySession {
    collection: Collection,
    record_results: bool,
}

impl StudySession {
    pub fn new(collection: Collection, record_results: bool) -> Self {
        Self { collection, record_results }
    }

    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        console.print(&format!(
            "The collection '{}' has {} flashcards.",
            self.collection.name(),
            self.collection.len()
        ));
        debug!(
            "studying {:?}, recording {}",
            self.collection.name(),
            self.record_results
        );

        let record_results = self.record_results;
        for flashcard in self.collection.flashcards_mut() {
            let Some(attempted) = prompts::prompt_or_decline(console, flashcard.question().as_str(), &[])? else {
                return Ok(());
            };

            if flashcard.answer().matches(&attempted) {
                console.print("Correct!");
                if record_results {
                    flashcard.history_mut().record_success()?;
                }
            } else {
                if record_results {
                    flashcard.history_mut().record_failure()?;
                }
                if prompts::yes_no_or_decline(console, "Incorrect. Would you like to see the answer?")? {
                    console.print(&format!("The correct answer is '{}'.", flashcard.answer()));
                }
            }
            console.empty_line();
        }
        Ok(())
    }
}
