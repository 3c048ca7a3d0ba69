//! CLI command definitions for the `smbchat` binary.

pub mod contacts;
pub mod prune;
pub mod transcript;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Customer-support chat front-end for SMB Global Marketing.
#[derive(Parser)]
#[command(name = "smbchat", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Directory holding config.toml, customer_info.csv and chat_history/.
    /// Falls back to $SMBCHAT_DATA_DIR, then the current directory.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Also export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web chat server.
    Serve {
        /// Port to listen on.
        #[arg(long, short, default_value = "8000")]
        port: u16,

        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// List collected customer contacts.
    Contacts,

    /// Print one customer's chat transcript.
    Transcript {
        /// Customer name as entered in the contact form.
        name: String,
    },

    /// Delete transcripts past the retention window.
    Prune {
        /// Retention in days (defaults to `retention_days` from config.toml).
        #[arg(long)]
        days: Option<u32>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Default tracing filter for the chosen verbosity; `RUST_LOG` overrides it.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "info",
            1 => "info,smbchat=debug,smbchat_core=debug,smbchat_infra=debug,tower_http=debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["smbchat", "serve"]).unwrap();
        match cli.command {
            Commands::Serve { port, host } => {
                assert_eq!(port, 8000);
                assert_eq!(host, "127.0.0.1");
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn verbosity_selects_filter() {
        let quiet = Cli::try_parse_from(["smbchat", "--quiet", "contacts"]).unwrap();
        assert_eq!(quiet.log_filter(), "error");
        let trace = Cli::try_parse_from(["smbchat", "-vv", "contacts"]).unwrap();
        assert_eq!(trace.log_filter(), "trace");
    }

    #[test]
    fn prune_days_is_optional() {
        let cli = Cli::try_parse_from(["smbchat", "prune", "--days", "7"]).unwrap();
        assert!(matches!(cli.command, Commands::Prune { days: Some(7) }));
    }
}
