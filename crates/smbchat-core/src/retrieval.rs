//! RetrievalEngine trait definition.
//!
//! The question-answering engine (document retrieval plus language model) is
//! an external collaborator. smbchat only needs its single call contract.

use smbchat_types::error::RetrievalError;
use smbchat_types::retrieval::{RetrievalAnswer, RetrievalRequest};

/// Answers a question given the conversation so far.
///
/// Implementations live in smbchat-infra (e.g., `HttpRetrievalEngine`).
/// Any error is fatal to the current turn; callers do not retry.
pub trait RetrievalEngine: Send + Sync {
    /// Human-readable engine name for logs.
    fn name(&self) -> &str;

    fn ask(
        &self,
        request: &RetrievalRequest,
    ) -> impl std::future::Future<Output = Result<RetrievalAnswer, RetrievalError>> + Send;
}
