//! Chat service orchestrating the info gate and question turns.

use std::time::Duration;

use smbchat_types::chat::{ChatTurn, SessionId, SessionState};
use smbchat_types::config::ChatbotConfig;
use smbchat_types::error::{SessionError, StoreError};
use smbchat_types::retrieval::RetrievalRequest;
use tracing::{debug, info, warn};

use crate::chat::ChatError;
use crate::classifier::{AnswerClassifier, ClassifiedAnswer};
use crate::retrieval::RetrievalEngine;
use crate::session::{SessionGate, SessionRegistry};
use crate::store::{ContactStore, TranscriptStore};

/// Inputs that end the visitor's session instead of being answered.
const EXIT_SENTINELS: [&str; 3] = ["quit", "q", "exit"];

pub fn is_exit_sentinel(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    EXIT_SENTINELS.contains(&input.as_str())
}

/// Result of a chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The question was answered and recorded.
    Answered(ClassifiedAnswer),
    /// The visitor asked to leave; their session has been dropped.
    Ended(ClassifiedAnswer),
}

impl TurnOutcome {
    pub fn answer(&self) -> &ClassifiedAnswer {
        match self {
            TurnOutcome::Answered(answer) | TurnOutcome::Ended(answer) => answer,
        }
    }

    /// HTML-safe bot line for the response body.
    pub fn render(&self) -> String {
        self.answer().render()
    }
}

/// Generic over the store and engine traits so smbchat-core never depends on
/// smbchat-infra.
pub struct ChatService<C: ContactStore, T: TranscriptStore, R: RetrievalEngine> {
    contacts: C,
    transcripts: T,
    engine: R,
    classifier: AnswerClassifier,
    sessions: SessionRegistry,
    retention_days: u32,
}

impl<C: ContactStore, T: TranscriptStore, R: RetrievalEngine> ChatService<C, T, R> {
    /// Prepare the contact store and restore the last known customer name.
    pub async fn initialize(
        contacts: C,
        transcripts: T,
        engine: R,
        config: &ChatbotConfig,
    ) -> Result<Self, StoreError> {
        contacts.ensure_initialized().await?;
        let restored_name = contacts.read_first().await?;
        info!(
            restored_name = %restored_name,
            engine = engine.name(),
            "chat service initialized"
        );

        Ok(Self {
            contacts,
            transcripts,
            engine,
            classifier: AnswerClassifier::from_config(config),
            sessions: SessionRegistry::new(
                restored_name,
                Duration::from_secs(config.session_idle_minutes.saturating_mul(60)),
            ),
            retention_days: config.retention_days,
        })
    }

    pub fn contacts(&self) -> &C {
        &self.contacts
    }

    pub fn transcripts(&self) -> &T {
        &self.transcripts
    }

    pub fn sessions(&self) -> &SessionRegistry {
        &self.sessions
    }

    pub fn classifier(&self) -> &AnswerClassifier {
        &self.classifier
    }

    /// Current gate state. Unknown visitors see a fresh gate; nothing is
    /// stored for them until they submit their info.
    pub async fn session_state(&self, id: SessionId) -> SessionState {
        match self.sessions.get(&id) {
            Some(handle) => handle.lock().await.gate.state().clone(),
            None => self.sessions.fresh_state(),
        }
    }

    /// Validate and persist contact info, then open the session's gate.
    ///
    /// Nothing is written and the gate stays closed when validation or the
    /// store append fails. Resubmitting appends another record.
    pub async fn submit_info(
        &self,
        id: SessionId,
        name: &str,
        email: &str,
    ) -> Result<SessionState, ChatError> {
        let record = SessionGate::validate_info(name, email)?;

        let handle = self.sessions.get_or_create(id);
        let mut ctx = handle.lock().await;
        self.contacts.append_record(&record).await?;
        ctx.gate.mark_collected(&record);

        info!(session_id = %id, customer = %record.name, "contact info collected");
        Ok(ctx.gate.state().clone())
    }

    /// Answer one question for a session whose gate is open.
    ///
    /// Turn order: gate check, exit sentinel, retrieval, classification,
    /// transcript append, history append, retention sweep. A retrieval or
    /// transcript failure leaves the history untouched.
    pub async fn handle_turn(
        &self,
        id: SessionId,
        user_input: &str,
    ) -> Result<TurnOutcome, ChatError> {
        let handle = self
            .sessions
            .get(&id)
            .ok_or(SessionError::InfoNotCollected)?;
        let mut ctx = handle.lock().await;
        let customer_name = ctx.gate.require_collected()?.to_string();

        if is_exit_sentinel(user_input) {
            drop(ctx);
            self.sessions.end(&id);
            info!(session_id = %id, "session ended by visitor");
            return Ok(TurnOutcome::Ended(self.classifier.farewell()));
        }

        let request = RetrievalRequest {
            question: user_input.to_string(),
            history: ctx.history_pairs(),
        };
        let raw = self.engine.ask(&request).await?;
        let answer = self.classifier.classify(user_input, &raw.answer);
        debug!(session_id = %id, category = ?answer.category, "turn classified");

        self.transcripts
            .append(&customer_name, &ChatTurn::new(user_input, answer.body_text()))
            .await?;
        ctx.history.push(ChatTurn::new(user_input, raw.answer));
        drop(ctx);

        match self.transcripts.prune_expired(self.retention_days).await {
            Ok(0) => {}
            Ok(removed) => info!(removed, "expired transcripts pruned"),
            Err(e) => warn!(error = %e, "transcript retention sweep failed"),
        }

        Ok(TurnOutcome::Answered(answer))
    }
}
