//! Confirmation prompt gate in front of destructive actions.

#[cfg(any(test, feature = "testing"))]
use std::collections::VecDeque;
#[cfg(any(test, feature = "testing"))]
use std::sync::{Mutex, PoisonError};

/// Asks the user to confirm an action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

/// Answers every prompt the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!(message, answer = self.0, "Confirm prompt");
        self.0
    }
}

/// Answers prompts from a queue (declining once it runs dry) and keeps the
/// prompts it was shown.
#[cfg(any(test, feature = "testing"))]
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    prompts: Mutex<Vec<String>>,
}

#[cfg(any(test, feature = "testing"))]
impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Confirm for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
        self.answers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or(false)
    }
}

/// Prompt text for deleting one record.
pub fn delete_prompt(entity: &str) -> String {
    format!("Are you sure you want to delete this {}?", entity.to_lowercase())
}
