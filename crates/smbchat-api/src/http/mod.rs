//! Web front-end: HTML pages, the chat endpoint and embedded static assets.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod pages;
pub mod router;
