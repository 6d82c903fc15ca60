//! Interactive value collection.
//!
//! Commands never read the terminal directly; they ask a [`Prompter`]. The
//! terminal implementation uses `dialoguer`, and tests script the answers.

use crate::error::{CoverkitError, Result};
use dialoguer::Input;

/// Asks the user a free-text question.
pub trait Prompter {
    /// Returns the answer, possibly empty. Blank answers select defaults.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .map(|answer| answer.trim().to_string())
            .map_err(|e| CoverkitError::Prompt(format!("{}: {}", question, e)))
    }
}

/// Replays canned answers and records the questions asked.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub questions: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        self.questions.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| CoverkitError::Prompt(format!("no scripted answer for '{}'", question)))
    }
}
