//! Line-oriented interaction boundary for the session flows.
//!
//! Sessions talk to the user exclusively through [`Console`]. The trait's
//! provided methods carry the shared retry-until-valid prompting: an
//! unacceptable answer re-prompts, and typing [`EXIT_WORD`] at a retry
//! raises [`PromptError::Abandoned`]. Every loop that asks a question is
//! expected to catch `Abandoned` itself and treat it as "stop asking".

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Keyword a user can type at a retry prompt to bail out of it.
pub const EXIT_WORD: &str = "exit";

/// Errors raised while prompting
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user typed the exit keyword instead of a valid answer
    #[error("no answer provided")]
    Abandoned,

    /// Terminal I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Prompt/print boundary consumed by all sessions
pub trait Console {
    /// Write one line of output.
    fn print(&mut self, message: &str);

    /// Show `prompt` and read one line of input, stripped of its line
    /// terminator. End of input raises [`PromptError::Abandoned`].
    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError>;

    fn empty_line(&mut self) {
        self.print("");
    }

    /// Ask until the answer is non-blank and, when `valid_answers` is
    /// non-empty, one of them. The first answer is returned as typed;
    /// the exit keyword only counts at a retry.
    fn prompt(&mut self, message: &str, valid_answers: &[&str]) -> Result<String, PromptError> {
        let mut answer = self.read_line(message)?;
        while !accepts(&answer, valid_answers) {
            let retry = if answer.trim().is_empty() {
                format!("An answer is required. Try again or type '{EXIT_WORD}'.")
            } else {
                format!("'{answer}' is not a valid answer. Try again or type '{EXIT_WORD}'.")
            };
            answer = self.read_line(&retry)?;
            if answer == EXIT_WORD {
                return Err(PromptError::Abandoned);
            }
        }
        Ok(answer)
    }

    /// Ask a yes/no question; `y`/`yes` and `n`/`no` are accepted in any
    /// case, anything else retries.
    fn prompt_yes_no(&mut self, yes_no_question: &str) -> Result<bool, PromptError> {
        let mut answer = self.read_line(yes_no_question)?;
        loop {
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {}
            }
            answer = self.read_line(&format!(
                "'{answer}' is not a yes-no answer. Try again or type '{EXIT_WORD}'."
            ))?;
            if answer == EXIT_WORD {
                return Err(PromptError::Abandoned);
            }
        }
    }
}

fn accepts(answer: &str, valid_answers: &[&str]) -> bool {
    !answer.trim().is_empty() && (valid_answers.is_empty() || valid_answers.contains(&answer))
}

/// Console backed by stdin/stdout
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn print(&mut self, message: &str) {
        println!("{message}");
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        print!("{prompt} ");
        io::stdout().flush()?;

        let mut buf = String::new();
        let read = io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            return Err(PromptError::Abandoned);
        }
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(buf)
    }
}

/// Scripted console for deterministic tests: queued input lines in,
/// captured output lines out. A drained script reads as end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            output: Vec::new(),
        }
    }

    /// Everything printed or prompted so far, one entry per line.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub fn output_contains(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, message: &str) {
        self.output.push(message.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.output.push(prompt.to_string());
        self.inputs.pop_front().ok_or(PromptError::Abandoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_returns_first_valid_answer() {
        let mut console = ScriptedConsole::new(&["add"]);
        let answer = console.prompt("What now?", &["add", "edit"]).unwrap();
        assert_eq!(answer, "add");
    }

    #[test]
    fn test_prompt_without_valid_answers_accepts_anything_non_blank() {
        let mut console = ScriptedConsole::new(&["whatever text"]);
        let answer = console.prompt("Say something.", &[]).unwrap();
        assert_eq!(answer, "whatever text");
    }

    #[test]
    fn test_prompt_retries_invalid_answer() {
        let mut console = ScriptedConsole::new(&["bogus", "edit"]);
        let answer = console.prompt("What now?", &["add", "edit"]).unwrap();
        assert_eq!(answer, "edit");
        assert!(console.output_contains("'bogus' is not a valid answer. Try again or type 'exit'."));
    }

    #[test]
    fn test_prompt_retries_blank_answer() {
        let mut console = ScriptedConsole::new(&["", "fine"]);
        let answer = console.prompt("Say something.", &[]).unwrap();
        assert_eq!(answer, "fine");
        assert!(console.output_contains("An answer is required. Try again or type 'exit'."));
    }

    #[test]
    fn test_prompt_abandoned_at_retry() {
        let mut console = ScriptedConsole::new(&["bogus", "exit"]);
        let result = console.prompt("What now?", &["add", "edit"]);
        assert!(matches!(result, Err(PromptError::Abandoned)));
    }

    #[test]
    fn test_prompt_first_answer_is_never_the_exit_keyword() {
        let mut console = ScriptedConsole::new(&["exit"]);
        let answer = console.prompt("Say something.", &[]).unwrap();
        assert_eq!(answer, "exit");
    }

    #[test]
    fn test_prompt_yes_no_accepts_variants() {
        for (input, expected) in [("y", true), ("YES", true), ("Yes", true), ("n", false), ("No", false)] {
            let mut console = ScriptedConsole::new(&[input]);
            assert_eq!(console.prompt_yes_no("Sure?").unwrap(), expected);
        }
    }

    #[test]
    fn test_prompt_yes_no_retries_non_answer() {
        let mut console = ScriptedConsole::new(&["maybe", "yes"]);
        assert!(console.prompt_yes_no("Sure?").unwrap());
        assert!(console.output_contains("'maybe' is not a yes-no answer. Try again or type 'exit'."));
    }

    #[test]
    fn test_prompt_yes_no_abandoned_at_retry() {
        let mut console = ScriptedConsole::new(&["maybe", "exit"]);
        let result = console.prompt_yes_no("Sure?");
        assert!(matches!(result, Err(PromptError::Abandoned)));
    }

    #[test]
    fn test_scripted_console_drained_script_abandons() {
        let mut console = ScriptedConsole::new(&[]);
        let result = console.read_line("Anyone there?");
        assert!(matches!(result, Err(PromptError::Abandoned)));
    }

    #[test]
    fn test_scripted_console_records_prompts_and_prints() {
        let mut console = ScriptedConsole::new(&["hi"]);
        console.print("hello");
        console.read_line("name?").unwrap();
        console.empty_line();
        assert_eq!(console.output(), ["hello", "name?", ""]);
    }
}
