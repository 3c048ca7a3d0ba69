//! CSV-backed contact store.
//!
//! `customer_info.csv` is comma-delimited with minimal quoting: a field is
//! quoted only when it contains a comma, a double quote, CR or LF, and
//! embedded quotes are doubled. Rows end with `\r\n`. The header row
//! `Customer Name,User Email` is written once when the file is created; files
//! written before the header existed are still read.

use std::path::{Path, PathBuf};

use smbchat_core::store::ContactStore;
use smbchat_types::contact::ContactRecord;
use smbchat_types::error::StoreError;
use tokio::io::AsyncWriteExt;

use crate::filesystem::contacts_path;

pub const HEADER: [&str; 2] = ["Customer Name", "User Email"];

const ROW_TERMINATOR: &str = "\r\n";

/// Append-only contact log stored as CSV.
pub struct CsvContactStore {
    path: PathBuf,
}

impl CsvContactStore {
    /// Store at `{data_dir}/customer_info.csv`.
    pub fn new(data_dir: &Path) -> Self {
        Self::with_path(contacts_path(data_dir))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn append_line(&self, line: &str) -> Result<(), StoreError> {
        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Data rows, header excluded.
    async fn read_rows(&self) -> Result<Vec<Vec<String>>, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut rows = parse_rows(&content)?;
        if rows.first().is_some_and(|row| is_header(row)) {
            rows.remove(0);
        }
        Ok(rows)
    }
}

impl ContactStore for CsvContactStore {
    async fn ensure_initialized(&self) -> Result<(), StoreError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
        {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        file.write_all(encode_row(&HEADER).as_bytes()).await?;
        file.flush().await?;

        tracing::info!(path = %self.path.display(), "contact store created");
        Ok(())
    }

    async fn append_record(&self, record: &ContactRecord) -> Result<(), StoreError> {
        self.append_line(&encode_row(&[&record.name, &record.email]))
            .await
    }

    async fn read_first(&self) -> Result<String, StoreError> {
        Ok(self
            .read_rows()
            .await?
            .into_iter()
            .next()
            .and_then(|row| row.into_iter().next())
            .unwrap_or_default())
    }

    async fn list_records(&self) -> Result<Vec<ContactRecord>, StoreError> {
        Ok(self
            .read_rows()
            .await?
            .into_iter()
            .map(|row| {
                let mut fields = row.into_iter();
                let name = fields.next().unwrap_or_default();
                let email = fields.next().unwrap_or_default();
                ContactRecord { name, email }
            })
            .collect())
    }
}

fn is_header(row: &[String]) -> bool {
    row.len() == HEADER.len() && row.iter().zip(HEADER).all(|(field, h)| field == h)
}

fn encode_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Encode one row including its terminator.
pub fn encode_row(fields: &[&str]) -> String {
    let mut line = fields
        .iter()
        .map(|f| encode_field(f))
        .collect::<Vec<_>>()
        .join(",");
    line.push_str(ROW_TERMINATOR);
    line
}

/// Parse CSV content into rows. Blank lines are skipped; quoted fields may
/// span lines.
pub fn parse_rows(content: &str) -> Result<Vec<Vec<String>>, StoreError> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut quote_line = 0;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(ch);
                }
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() => {
                in_quotes = true;
                quote_line = line;
            }
            ',' => row.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                row.push(std::mem::take(&mut field));
                push_row(&mut rows, std::mem::take(&mut row));
                line += 1;
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(StoreError::Malformed {
            line: quote_line,
            reason: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        push_row(&mut rows, row);
    }

    Ok(rows)
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    if row.iter().any(|f| !f.is_empty()) {
        rows.push(row);
    }
}
