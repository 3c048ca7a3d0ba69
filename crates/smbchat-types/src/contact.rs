//! Contact records collected by the info form.

use serde::{Deserialize, Serialize};

/// A visitor's name and email, as submitted through the info form.
///
/// Records are append-only: they are never mutated or deleted once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
}

impl ContactRecord {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}
