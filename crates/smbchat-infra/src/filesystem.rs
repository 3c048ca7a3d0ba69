//! Data directory layout.
//!
//! ```text
//! {data_dir}/
//!   config.toml
//!   customer_info.csv
//!   chat_history/
//!     {customer}_chat_history.txt
//! ```

use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "SMBCHAT_DATA_DIR";
pub const CONFIG_FILE: &str = "config.toml";
pub const CONTACTS_FILE: &str = "customer_info.csv";
pub const TRANSCRIPTS_DIR: &str = "chat_history";

/// Resolve the data directory.
///
/// Priority:
/// 1. Explicit path (the `--data-dir` flag)
/// 2. `SMBCHAT_DATA_DIR` environment variable
/// 3. The current directory, where existing `customer_info.csv` and
///    `chat_history/` files already live
pub fn resolve_data_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    PathBuf::from(".")
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

pub fn contacts_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONTACTS_FILE)
}

pub fn transcripts_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(TRANSCRIPTS_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/srv/smbchat")));
        assert_eq!(dir, PathBuf::from("/srv/smbchat"));
    }

    #[test]
    fn test_layout_paths() {
        let data_dir = PathBuf::from("/srv/smbchat");
        assert_eq!(
            contacts_path(&data_dir),
            PathBuf::from("/srv/smbchat/customer_info.csv")
        );
        assert_eq!(
            transcripts_dir(&data_dir),
            PathBuf::from("/srv/smbchat/chat_history")
        );
        assert_eq!(
            config_path(&data_dir),
            PathBuf::from("/srv/smbchat/config.toml")
        );
    }

    #[test]
    fn test_resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var(DATA_DIR_ENV, "/tmp/test-smbchat");
        }
        let dir = resolve_data_dir(None);
        assert_eq!(dir, PathBuf::from("/tmp/test-smbchat"));
        unsafe {
            std::env::remove_var(DATA_DIR_ENV);
        }
    }
}
