//! Business logic and port traits for smbchat.
//!
//! This crate defines the store and retrieval-engine traits that the
//! infrastructure layer implements, plus the pure decision logic: the
//! per-visitor session gate and the keyword answer classifier. It depends only
//! on `smbchat-types` -- never on `smbchat-infra` or any IO crate.

pub mod chat;
pub mod classifier;
pub mod retrieval;
pub mod session;
pub mod store;
