//! HTTP client for the external retrieval engine.
//!
//! POSTs `{"question": ..., "chat_history": [[q, a], ...]}` to the configured
//! endpoint and expects `{"answer": ...}` back. An optional API key is sent as
//! a bearer token; it is held as a [`SecretString`] and never logged.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use smbchat_core::retrieval::RetrievalEngine;
use smbchat_types::config::RetrievalConfig;
use smbchat_types::error::RetrievalError;
use smbchat_types::retrieval::{RetrievalAnswer, RetrievalRequest};

/// Longest error body kept in [`RetrievalError::Status`].
const MAX_ERROR_BODY: usize = 512;

pub struct HttpRetrievalEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<SecretString>,
    timeout_secs: Option<u64>,
}

impl HttpRetrievalEngine {
    pub fn new(config: &RetrievalConfig) -> Result<Self, RetrievalError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| RetrievalError::Request(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config
                .api_key
                .as_ref()
                .filter(|k| !k.is_empty())
                .map(|k| SecretString::from(k.clone())),
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_send_error(&self, err: reqwest::Error) -> RetrievalError {
        match self.timeout_secs {
            Some(secs) if err.is_timeout() => RetrievalError::Timeout(secs),
            _ => RetrievalError::Request(err.to_string()),
        }
    }
}

impl RetrievalEngine for HttpRetrievalEngine {
    fn name(&self) -> &str {
        "http"
    }

    async fn ask(&self, request: &RetrievalRequest) -> Result<RetrievalAnswer, RetrievalError> {
        let mut builder = self.client.post(&self.endpoint).json(request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        tracing::debug!(
            endpoint = %self.endpoint,
            history_len = request.history.len(),
            "querying retrieval engine"
        );

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(RetrievalError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| self.map_send_error(e))?;
        serde_json::from_slice::<RetrievalAnswer>(&bytes)
            .map_err(|e| RetrievalError::InvalidResponse(e.to_string()))
    }
}
