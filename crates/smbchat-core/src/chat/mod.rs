//! Chat turn orchestration.
//!
//! `ChatService` ties the session gate, retrieval engine, answer classifier
//! and the two stores together into the two visitor operations: submitting
//! contact info and asking a question.

pub mod service;

use smbchat_types::error::{RetrievalError, SessionError, StoreError, ValidationError};
use thiserror::Error;

/// Everything that can end a visitor request unsuccessfully.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}
