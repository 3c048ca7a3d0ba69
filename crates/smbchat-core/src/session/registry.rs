//! Session registry: one context per visitor.
//!
//! Contexts sit behind a per-session `tokio::sync::Mutex` so turns within a
//! session are serialized (the lock is held across the retrieval call) while
//! different sessions proceed concurrently.
//!
//! Only [`SessionRegistry::get_or_create`] inserts; lookups for unknown ids
//! leave the map alone. Sessions idle for longer than the configured window
//! are dropped when they are next looked up and swept whenever a new session
//! is created.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use smbchat_types::chat::{ChatTurn, SessionId, SessionState};
use tokio::sync::Mutex;

use super::gate::SessionGate;

/// Everything remembered about one visitor.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub gate: SessionGate,
    /// Completed turns, oldest first.
    pub history: Vec<ChatTurn>,
}

impl SessionContext {
    /// History in the `(question, answer)` shape the retrieval engine takes.
    pub fn history_pairs(&self) -> Vec<(String, String)> {
        self.history.iter().map(ChatTurn::as_pair).collect()
    }
}

struct SessionEntry {
    context: Arc<Mutex<SessionContext>>,
    last_seen: Instant,
}

pub struct SessionRegistry {
    sessions: DashMap<SessionId, SessionEntry>,
    /// Display name restored from the contact store at startup.
    restored_name: String,
    idle_ttl: Duration,
}

impl SessionRegistry {
    pub fn new(restored_name: impl Into<String>, idle_ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            restored_name: restored_name.into(),
            idle_ttl,
        }
    }

    /// Gate state a visitor without a stored session sees.
    pub fn fresh_state(&self) -> SessionState {
        SessionGate::initialize(self.restored_name.clone())
            .state()
            .clone()
    }

    /// Fetch a live session without creating one.
    pub fn get(&self, id: &SessionId) -> Option<Arc<Mutex<SessionContext>>> {
        self.get_at(id, Instant::now())
    }

    /// Fetch a session, creating a fresh gated one on first sight.
    pub fn get_or_create(&self, id: SessionId) -> Arc<Mutex<SessionContext>> {
        self.get_or_create_at(id, Instant::now())
    }

    /// Drop a session. Returns whether it existed.
    pub fn end(&self, id: &SessionId) -> bool {
        self.sessions.remove(id).is_some()
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn is_idle(&self, entry: &SessionEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.last_seen) >= self.idle_ttl
    }

    fn get_at(&self, id: &SessionId, now: Instant) -> Option<Arc<Mutex<SessionContext>>> {
        self.sessions.remove_if(id, |_, entry| self.is_idle(entry, now));
        self.sessions.get_mut(id).map(|mut entry| {
            entry.last_seen = now;
            entry.context.clone()
        })
    }

    fn get_or_create_at(&self, id: SessionId, now: Instant) -> Arc<Mutex<SessionContext>> {
        if let Some(context) = self.get_at(&id, now) {
            return context;
        }

        let evicted = self.evict_idle_at(now);
        if evicted > 0 {
            tracing::debug!(evicted, "idle sessions evicted");
        }

        let mut entry = self.sessions.entry(id).or_insert_with(|| {
            tracing::debug!(session_id = %id, "new session");
            SessionEntry {
                context: Arc::new(Mutex::new(SessionContext {
                    gate: SessionGate::initialize(self.restored_name.clone()),
                    history: Vec::new(),
                })),
                last_seen: now,
            }
        });
        entry.last_seen = now;
        entry.context.clone()
    }

    /// Remove every session idle at `now`. Returns how many were removed.
    fn evict_idle_at(&self, now: Instant) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| !self.is_idle(entry, now));
        before.saturating_sub(self.sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60 * 60);

    fn registry(restored_name: &str) -> SessionRegistry {
        SessionRegistry::new(restored_name, TTL)
    }

    #[tokio::test]
    async fn test_new_session_starts_gated_with_restored_name() {
        let registry = registry("Ana");
        let ctx = registry.get_or_create(SessionId::new());
        let ctx = ctx.lock().await;
        assert!(!ctx.gate.state().info_collected);
        assert_eq!(ctx.gate.state().customer_name, "Ana");
        assert!(ctx.history.is_empty());
        assert_eq!(registry.fresh_state(), *ctx.gate.state());
    }

    #[tokio::test]
    async fn test_get_or_create_returns_same_context() {
        let registry = registry("");
        let id = SessionId::new();
        registry
            .get_or_create(id)
            .lock()
            .await
            .history
            .push(ChatTurn::new("q", "a"));

        let again = registry.get_or_create(id);
        assert_eq!(again.lock().await.history.len(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_unknown_does_not_insert() {
        let registry = registry("");
        for _ in 0..1000 {
            assert!(registry.get(&SessionId::new()).is_none());
        }
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let registry = registry("");
        let a = SessionId::new();
        let b = SessionId::new();
        registry
            .get_or_create(a)
            .lock()
            .await
            .history
            .push(ChatTurn::new("q", "a"));
        assert!(registry.get_or_create(b).lock().await.history.is_empty());
    }

    #[test]
    fn test_end_removes_session() {
        let registry = registry("");
        let id = SessionId::new();
        registry.get_or_create(id);
        assert!(registry.contains(&id));
        assert!(registry.end(&id));
        assert!(!registry.end(&id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_idle_session_expires_on_lookup() {
        let registry = registry("");
        let id = SessionId::new();
        let start = Instant::now();
        registry.get_or_create_at(id, start);

        assert!(registry.get_at(&id, start + TTL / 2).is_some());
        // last_seen was refreshed by the lookup above
        assert!(registry.get_at(&id, start + TTL).is_some());
        assert!(registry.get_at(&id, start + TTL * 3).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_new_session_sweeps_idle_ones() {
        let registry = registry("");
        let start = Instant::now();
        for _ in 0..100 {
            registry.get_or_create_at(SessionId::new(), start);
        }
        let active = SessionId::new();
        registry.get_or_create_at(active, start + TTL / 2);

        registry.get_or_create_at(SessionId::new(), start + TTL);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(&active));
    }

    #[test]
    fn test_history_pairs_keep_order() {
        let ctx = SessionContext {
            gate: SessionGate::default(),
            history: vec![ChatTurn::new("q1", "a1"), ChatTurn::new("q2", "a2")],
        };
        assert_eq!(
            ctx.history_pairs(),
            vec![
                ("q1".to_string(), "a1".to_string()),
                ("q2".to_string(), "a2".to_string())
            ]
        );
    }
}
