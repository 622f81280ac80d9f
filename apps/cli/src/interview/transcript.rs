#![allow(dead_code)]

//! Transcript — the ordered turn history of one interview session.
//!
//! Append-only for the lifetime of a session: the whole history is replayed
//! verbatim as completion context on every request, so turns are never
//! edited, reordered, or dropped.

use serde::{Deserialize, Serialize};

/// Author of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
    User,
}

impl Role {
    /// Wire name used by the completion API.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Assistant => "assistant",
            Role::User => "user",
        }
    }
}

/// One utterance in the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Ordered, append-only turn history.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::assistant(content));
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::user(content));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Candidate-authored turns only, in insertion order. Used by analysis.
    pub fn user_turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(|t| t.role == Role::User)
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_preserve_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push_assistant("Welcome!");
        transcript.push_user("Thanks.");
        transcript.push_assistant("First question?");

        let roles: Vec<Role> = transcript.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
    }

    #[test]
    fn test_user_turns_filters_assistant_turns() {
        let mut transcript = Transcript::new();
        transcript.push_assistant("Q1?");
        transcript.push_user("A1");
        transcript.push_assistant("Q2?");
        transcript.push_user("A2");

        let answers: Vec<&str> = transcript.user_turns().map(|t| t.content.as_str()).collect();
        assert_eq!(answers, vec!["A1", "A2"]);
    }

    #[test]
    fn test_role_wire_names_are_lowercase() {
        assert_eq!(Role::Assistant.as_str(), "assistant");
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    }
}
