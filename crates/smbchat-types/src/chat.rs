//! Session and conversation types.
//!
//! A visitor session moves through two phases: contact info not yet
//! collected, then chat allowed. Each session carries its own ordered
//! conversation history.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Unique identifier for a visitor session, wrapping a UUID v7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new SessionId using UUID v7.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// One question/answer exchange.
///
/// `bot_answer` holds the engine's raw answer; the sequence of turns is
/// handed back to the retrieval engine as conversation context, so order
/// matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub user_input: String,
    pub bot_answer: String,
}

impl ChatTurn {
    pub fn new(user_input: impl Into<String>, bot_answer: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            bot_answer: bot_answer.into(),
        }
    }

    /// The `(question, answer)` pair shape expected by the retrieval engine.
    pub fn as_pair(&self) -> (String, String) {
        (self.user_input.clone(), self.bot_answer.clone())
    }
}

/// The info-collection gate for one visitor.
///
/// Invariant: chat turns are only processed once `info_collected` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub info_collected: bool,
    pub customer_name: String,
}
