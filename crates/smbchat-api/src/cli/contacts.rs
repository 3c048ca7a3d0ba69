//! `smbchat contacts` - list collected contact records.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;
use serde_json::json;

use smbchat_core::store::ContactStore;

use crate::state::AppState;

pub async fn list_contacts(state: &AppState, json: bool) -> Result<()> {
    let records = state.chat_service.contacts().list_records().await?;

    if json {
        let rows: Vec<_> = records
            .iter()
            .map(|r| json!({ "name": r.name, "email": r.email }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if records.is_empty() {
        println!();
        println!(
            "  {} No contacts collected yet. Start the server with: {}",
            style("i").blue().bold(),
            style("smbchat serve").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Customer Name").fg(Color::White),
        Cell::new("Email").fg(Color::White),
    ]);

    for (i, record) in records.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).fg(Color::DarkGrey),
            Cell::new(&record.name).fg(Color::Cyan),
            Cell::new(&record.email),
        ]);
    }

    println!();
    println!("{table}");
    println!(
        "  {} contact(s) in {}",
        style(records.len()).bold(),
        style(state.chat_service.contacts().path().display()).dim()
    );
    println!();
    Ok(())
}
