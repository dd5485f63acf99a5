//! Prompt adapters shared by the session flows
//!
//! These wrap the console's retry prompting and translate abandonment
//! into a plain "declined" value, so session loops never see
//! [`PromptError::Abandoned`] directly.

use crate::error::Result;
use mnemo_core::console::{Console, PromptError};
use mnemo_store::Collection;

/// Ask until the answer is acceptable; `None` means the user bailed out.
pub(crate) fn prompt_or_decline(
    console: &mut dyn Console,
    message: &str,
    valid_answers: &[&str],
) -> Result<Option<String>> {
    match console.prompt(message, valid_answers) {
        Ok(answer) => Ok(Some(answer)),
        Err(PromptError::Abandoned) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Ask a yes/no question, treating abandonment as "no".
pub(crate) fn yes_no_or_decline(console: &mut dyn Console, yes_no_question: &str) -> Result<bool> {
    match console.prompt_yes_no(yes_no_question) {
        Ok(answer) => Ok(answer),
        Err(PromptError::Abandoned) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Ask for the id of a flashcard in `collection` until one matches.
///
/// Malformed or unknown ids re-prompt; `None` means the user bailed out.
pub(crate) fn choose_flashcard_id(console: &mut dyn Console, collection: &Collection) -> Result<Option<i64>> {
    let ids: Vec<String> = collection.flashcards().iter().map(|f| f.id().to_string()).collect();
    let valid: Vec<&str> = ids.iter().map(String::as_str).collect();
    loop {
        let Some(answer) = prompt_or_decline(console, "Which flashcard? Type its id.", &valid)? else {
            return Ok(None);
        };
        match answer.parse::<i64>() {
            Ok(id) if collection.contains(id) => return Ok(Some(id)),
            _ => console.print(&format!("'{answer}' is not the id of a flashcard in this collection.")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnemo_core::console::ScriptedConsole;
    use mnemo_core::{Answer, Question};
    use mnemo_store::Store;

    fn collection_with_one_card() -> Collection {
        let store = Store::open_in_memory().unwrap();
        let mut collection = store.create_collection("Spanish").unwrap();
        collection
            .add_flashcard(Question::new("hola").unwrap(), Answer::new("hello").unwrap())
            .unwrap();
        collection
    }

    #[test]
    fn test_prompt_or_decline_passes_valid_answer_through() {
        let mut console = ScriptedConsole::new(&["add"]);
        let answer = prompt_or_decline(&mut console, "What now?", &["add", "edit"]).unwrap();
        assert_eq!(answer.as_deref(), Some("add"));
    }

    #[test]
    fn test_prompt_or_decline_maps_abandonment_to_none() {
        let mut console = ScriptedConsole::new(&["bogus", "exit"]);
        let answer = prompt_or_decline(&mut console, "What now?", &["add", "edit"]).unwrap();
        assert_eq!(answer, None);
    }

    #[test]
    fn test_yes_no_or_decline_maps_abandonment_to_no() {
        let mut console = ScriptedConsole::new(&["hmm", "exit"]);
        assert!(!yes_no_or_decline(&mut console, "Sure?").unwrap());
    }

    #[test]
    fn test_choose_flashcard_id_accepts_a_listed_id() {
        let collection = collection_with_one_card();
        let id = collection.flashcards()[0].id();

        let mut console = ScriptedConsole::new(&[&id.to_string()]);
        let chosen = choose_flashcard_id(&mut console, &collection).unwrap();
        assert_eq!(chosen, Some(id));
    }

    #[test]
    fn test_choose_flashcard_id_reprompts_malformed_input() {
        let collection = collection_with_one_card();
        let id = collection.flashcards()[0].id();

        let mut console = ScriptedConsole::new(&["abc", &id.to_string()]);
        let chosen = choose_flashcard_id(&mut console, &collection).unwrap();
        assert_eq!(chosen, Some(id));
        assert!(console.output_contains("'abc' is not a valid answer. Try again or type 'exit'."));
    }

    #[test]
    fn test_choose_flashcard_id_reprompts_unknown_id() {
        let collection = collection_with_one_card();
        let id = collection.flashcards()[0].id();

        let mut console = ScriptedConsole::new(&["999", &id.to_string()]);
        let chosen = choose_flashcard_id(&mut console, &collection).unwrap();
        assert_eq!(chosen, Some(id));
    }

    #[test]
    fn test_choose_flashcard_id_abandoned() {
        let collection = collection_with_one_card();
        let mut console = ScriptedConsole::new(&["abc", "exit"]);
        let chosen = choose_flashcard_id(&mut console, &collection).unwrap();
        assert_eq!(chosen, None);
    }
}
