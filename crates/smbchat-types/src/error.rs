use thiserror::Error;

/// Rejected form submissions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
}

/// Session gate violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("contact info has not been collected for this session")]
    InfoNotCollected,
}

/// Errors from the contact and transcript stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Errors from the external retrieval engine. Always fatal to the current turn.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("retrieval request failed: {0}")]
    Request(String),

    #[error("retrieval engine returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid retrieval response: {0}")]
    InvalidResponse(String),

    #[error("retrieval request timed out after {0}s")]
    Timeout(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::MissingField("user_email");
        assert_eq!(err.to_string(), "missing required field 'user_email'");
    }

    #[test]
    fn test_store_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_retrieval_status_display() {
        let err = RetrievalError::Status {
            status: 503,
            body: "overloaded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "retrieval engine returned status 503: overloaded"
        );
    }
}
