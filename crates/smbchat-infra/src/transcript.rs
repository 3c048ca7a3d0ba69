//! Per-customer transcript files.
//!
//! Each customer gets `{transcripts_dir}/{name}_chat_history.txt`, appended two
//! lines per turn. Line breaks inside a turn are folded to spaces so every
//! turn stays exactly two lines. Files older than the retention window are
//! deleted whole.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Duration, Utc};
use smbchat_core::store::TranscriptStore;
use smbchat_types::chat::ChatTurn;
use smbchat_types::error::StoreError;
use tokio::io::AsyncWriteExt;

use crate::filesystem::transcripts_dir;

const FILE_SUFFIX: &str = "_chat_history.txt";

/// Transcript store backed by one text file per customer name.
pub struct FileTranscriptStore {
    dir: PathBuf,
    bot_label: String,
}

impl FileTranscriptStore {
    /// Store under `{data_dir}/chat_history/`, writing bot lines as `{bot_label}: ...`.
    pub fn new(data_dir: &Path, bot_label: impl Into<String>) -> Self {
        Self {
            dir: transcripts_dir(data_dir),
            bot_label: bot_label.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the transcript for `customer_name`.
    ///
    /// Path separators and NUL are replaced with `_` so the file always lands
    /// directly inside the transcripts directory.
    pub fn transcript_path(&self, customer_name: &str) -> PathBuf {
        let safe: String = customer_name
            .chars()
            .map(|c| match c {
                '/' | '\\' | '\0' => '_',
                _ => c,
            })
            .collect();
        self.dir.join(format!("{safe}{FILE_SUFFIX}"))
    }

    /// Full transcript text, or an empty string when none exists.
    pub async fn read_transcript(&self, customer_name: &str) -> Result<String, StoreError> {
        match tokio::fs::read_to_string(self.transcript_path(customer_name)).await {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Delete transcripts older than `max_age_days` as seen from `now`.
    pub async fn prune_expired_at(
        &self,
        max_age_days: u32,
        now: DateTime<Utc>,
    ) -> Result<usize, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(err.into()),
        };

        let threshold = now - Duration::days(i64::from(max_age_days));
        let mut removed = 0;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let metadata = match entry.metadata().await {
                Ok(metadata) => metadata,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "cannot stat transcript");
                    continue;
                }
            };
            if !metadata.is_file() {
                continue;
            }

            let Some(created) = file_age_anchor(&metadata) else {
                continue;
            };
            if created >= threshold {
                continue;
            }

            match tokio::fs::remove_file(&path).await {
                Ok(()) => {
                    tracing::info!(path = %path.display(), "expired transcript removed");
                    removed += 1;
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to remove transcript");
                }
            }
        }

        Ok(removed)
    }
}

/// Collapse each run of CR/LF characters into a single space.
fn single_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for ch in text.chars() {
        if ch == '\r' || ch == '\n' {
            if !in_break {
                out.push(' ');
                in_break = true;
            }
        } else {
            out.push(ch);
            in_break = false;
        }
    }
    out
}

/// Creation time, or modification time where birth time is unavailable.
fn file_age_anchor(metadata: &std::fs::Metadata) -> Option<DateTime<Utc>> {
    metadata
        .created()
        .or_else(|_| metadata.modified())
        .ok()
        .map(|t: SystemTime| DateTime::<Utc>::from(t))
}

impl TranscriptStore for FileTranscriptStore {
    async fn append(&self, customer_name: &str, turn: &ChatTurn) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let entry = format!(
            "{}: {}\n{}: {}\n",
            single_line(customer_name),
            single_line(&turn.user_input),
            single_line(&self.bot_label),
            single_line(&turn.bot_answer)
        );

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.transcript_path(customer_name))
            .await?;
        file.write_all(entry.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn prune_expired(&self, max_age_days: u32) -> Result<usize, StoreError> {
        self.prune_expired_at(max_age_days, Utc::now()).await
    }
}
