//! Per-visitor session gating.
//!
//! Each visitor gets a [`SessionContext`] keyed by a [`SessionId`]: the
//! two-phase gate (info not collected / collected) plus that visitor's
//! conversation history.
//!
//! [`SessionId`]: smbchat_types::chat::SessionId

pub mod gate;
pub mod registry;

pub use gate::SessionGate;
pub use registry::{SessionContext, SessionRegistry};
