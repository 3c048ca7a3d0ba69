//! Retrieval engine clients.

pub mod http;

pub use http::HttpRetrievalEngine;
