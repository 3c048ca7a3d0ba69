//! Configuration types for smbchat.
//!
//! `ChatbotConfig` is the top-level `config.toml` in the data directory. It
//! carries the keyword lists and link targets used by the answer classifier,
//! the retention window for transcripts, and the retrieval engine endpoint.
//! Every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatbotConfig {
    /// Speaker label prefixed to every bot line.
    pub bot_label: String,

    /// Raw answers longer than this many words are truncated before
    /// classification.
    pub max_response_words: usize,

    /// Transcript files older than this many days are deleted.
    pub retention_days: u32,

    /// Visitor sessions untouched for this many minutes are forgotten.
    pub session_idle_minutes: u64,

    pub retrieval: RetrievalConfig,
    pub keywords: KeywordConfig,
    pub links: LinkConfig,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            bot_label: "SMB Bot".to_string(),
            max_response_words: 50,
            retention_days: 30,
            session_idle_minutes: 120,
            retrieval: RetrievalConfig::default(),
            keywords: KeywordConfig::default(),
            links: LinkConfig::default(),
        }
    }
}

/// Where the external question-answering engine lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// URL accepting `POST {"question", "chat_history"}` and answering `{"answer"}`.
    pub endpoint: String,
    /// Optional bearer token. `SMBCHAT_RETRIEVAL_API_KEY` takes precedence.
    pub api_key: Option<String>,
    /// Client-side timeout. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8001/ask".to_string(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

/// Keyword sets driving the classifier rules.
///
/// All matching is case-insensitive substring matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Phrases in the *answer* that mean the engine had nothing useful.
    pub uncertainty: Vec<String>,
    /// Words in the *question* that trigger the pricing policy response.
    pub pricing: Vec<String>,
    /// Words in the question that append the services link.
    pub services: Vec<String>,
    /// Words in the question that append the email and social links.
    pub social: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            uncertainty: strings(&["I'm sorry", "I apologize", "I don't have", "I don't know"]),
            pricing: strings(&["price", "cost", "pricing", "quote"]),
            services: strings(&["benefits", "features", "services", "seo"]),
            social: strings(&["social media", "instagram", "facebook", "youtube", "contact"]),
        }
    }
}

/// Link targets embedded in canned responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    pub contact_url: String,
    pub services_url: String,
    pub email: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            contact_url: "https://smbglobalmarketing.com/get-in-touch/".to_string(),
            services_url: "https://smbglobalmarketing.com/services/".to_string(),
            email: "hello@smbglobalmarketing.com".to_string(),
            facebook_url: "https://www.facebook.com/smbglobalmarketing".to_string(),
            instagram_url: "https://www.instagram.com/smbglobalmarketing/".to_string(),
            youtube_url: "https://www.youtube.com/channel/UCpsCOYtpNzO8KnbpLnESBTA".to_string(),
        }
    }
}
