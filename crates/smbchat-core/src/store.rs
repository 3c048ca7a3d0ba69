//! Persistence ports for contact records and chat transcripts.
//!
//! Implementations live in smbchat-infra (`CsvContactStore`,
//! `FileTranscriptStore`). Uses native async fn in traits (RPITIT).

use smbchat_types::chat::ChatTurn;
use smbchat_types::contact::ContactRecord;
use smbchat_types::error::StoreError;

/// Append-only log of collected contact records.
pub trait ContactStore: Send + Sync {
    /// Create the backing storage with its header if it does not exist yet.
    fn ensure_initialized(
        &self,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Append one record.
    fn append_record(
        &self,
        record: &ContactRecord,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Name of the first stored record, or an empty string when there is none.
    fn read_first(&self) -> impl std::future::Future<Output = Result<String, StoreError>> + Send;

    /// All records in insertion order.
    fn list_records(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ContactRecord>, StoreError>> + Send;
}

/// Per-customer transcripts with a retention window.
pub trait TranscriptStore: Send + Sync {
    /// Append one turn to the customer's transcript, creating it if needed.
    fn append(
        &self,
        customer_name: &str,
        turn: &ChatTurn,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Delete transcripts older than `max_age_days`. Returns how many were removed.
    fn prune_expired(
        &self,
        max_age_days: u32,
    ) -> impl std::future::Future<Output = Result<usize, StoreError>> + Send;
}
