//! Shared domain types for smbchat.
//!
//! Contact records, chat turns, per-visitor session state, configuration and
//! the error enums shared by the core and infrastructure crates.
//!
//! Zero infrastructure dependencies -- only serde, uuid, thiserror.

pub mod chat;
pub mod config;
pub mod contact;
pub mod error;
pub mod retrieval;
