//! Request/response shapes for the external retrieval engine.

use serde::{Deserialize, Serialize};

/// A question plus the conversation so far, oldest turn first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalRequest {
    pub question: String,
    #[serde(rename = "chat_history", default)]
    pub history: Vec<(String, String)>,
}

/// The engine's natural-language answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievalAnswer {
    pub answer: String,
}
