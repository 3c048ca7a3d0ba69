//! `smbchat transcript <name>` - print a stored conversation.

use anyhow::Result;
use console::style;
use serde_json::json;

use crate::state::AppState;

pub async fn show_transcript(state: &AppState, name: &str, json: bool) -> Result<()> {
    let transcripts = state.chat_service.transcripts();
    let content = transcripts.read_transcript(name).await?;

    if json {
        let lines: Vec<&str> = content.lines().collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "customer": name,
                "path": transcripts.transcript_path(name).display().to_string(),
                "lines": lines,
            }))?
        );
        return Ok(());
    }

    if content.is_empty() {
        println!(
            "  {} No transcript for '{}'",
            style("i").blue().bold(),
            style(name).cyan()
        );
        return Ok(());
    }

    let bot_prefix = format!("{}: ", state.config.bot_label);
    for line in content.lines() {
        if line.starts_with(&bot_prefix) {
            println!("  {}", style(line).green());
        } else {
            println!("  {line}");
        }
    }
    Ok(())
}
