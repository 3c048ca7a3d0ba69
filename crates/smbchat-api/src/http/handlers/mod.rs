//! HTTP request handlers.

pub mod assets;
pub mod chat;
pub mod index;
pub mod info;
