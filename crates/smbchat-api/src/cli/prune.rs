//! `smbchat prune` - run the transcript retention sweep once.

use anyhow::Result;
use console::style;
use serde_json::json;

use smbchat_core::store::TranscriptStore;

use crate::state::AppState;

pub async fn prune(state: &AppState, days: Option<u32>, json: bool) -> Result<()> {
    let days = days.unwrap_or(state.config.retention_days);
    let removed = state.chat_service.transcripts().prune_expired(days).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "removed": removed, "retention_days": days }))?
        );
        return Ok(());
    }

    println!(
        "  {} Removed {} transcript(s) older than {} day(s)",
        style("✓").green().bold(),
        style(removed).bold(),
        days
    );
    Ok(())
}
