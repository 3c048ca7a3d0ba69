//! Infrastructure layer for smbchat.
//!
//! Contains implementations of the traits defined in `smbchat-core`: the CSV
//! contact store, the per-customer transcript files with retention pruning,
//! and the HTTP client for the external retrieval engine. Also loads
//! `config.toml` and resolves the data directory.

pub mod config;
pub mod contact;
pub mod filesystem;
pub mod retrieval;
pub mod transcript;
