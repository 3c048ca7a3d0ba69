//! Custom axum extractors.

pub mod session;
