//! Application state wiring the chat service to its concrete adapters.
//!
//! `ChatService` is generic over the store and engine traits; AppState pins
//! it to the CSV contact store, the file transcript store and the HTTP
//! retrieval client.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use smbchat_core::chat::service::ChatService;
use smbchat_infra::config::load_config;
use smbchat_infra::contact::CsvContactStore;
use smbchat_infra::filesystem::resolve_data_dir;
use smbchat_infra::retrieval::HttpRetrievalEngine;
use smbchat_infra::transcript::FileTranscriptStore;
use smbchat_types::config::ChatbotConfig;

pub type ConcreteChatService =
    ChatService<CsvContactStore, FileTranscriptStore, HttpRetrievalEngine>;

/// Shared by CLI commands and HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<ChatbotConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory, load `config.toml` and wire services.
    pub async fn init(data_dir: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir(data_dir);
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        Self::with_config(data_dir, config).await
    }

    /// Wire services from an already loaded configuration.
    pub async fn with_config(data_dir: PathBuf, config: ChatbotConfig) -> anyhow::Result<Self> {
        let contacts = CsvContactStore::new(&data_dir);
        let transcripts = FileTranscriptStore::new(&data_dir, config.bot_label.clone());
        let engine = HttpRetrievalEngine::new(&config.retrieval)?;

        let chat_service =
            ChatService::initialize(contacts, transcripts, engine, &config).await?;

        tracing::debug!(data_dir = %data_dir.display(), "application state ready");

        Ok(Self {
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
            data_dir,
        })
    }
}
