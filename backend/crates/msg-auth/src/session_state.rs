//! Process-wide "is someone signed in" state.
//!
//! Owned by the composition root and handed out by clone; there is no global.

use msg_core::Session;

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::watch;

#[derive(Clone)]
pub struct SessionState {
    tx: Arc<watch::Sender<Option<Session>>>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn activate(&self, session: Session) {
        info!("Session active for uid {} via {}", session.uid, session.provider);
        self.tx.send_replace(Some(session));
    }

    /// Sign out. Clearing an already empty state is a no-op.
    pub fn clear(&self) {
        if self.tx.send_replace(None).is_some() {
            info!("Session cleared");
        } else {
            debug!("Session clear requested with no active session");
        }
    }

    pub fn is_active(&self) -> bool {
        self.tx.borrow().is_some()
    }

    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    /// Observe activations and sign-outs.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    ShowConversations,
    PresentSignIn,
}

/// Decides what the conversation list does each time it becomes visible.
#[derive(Clone)]
pub struct ConversationGate {
    session: SessionState,
}

impl ConversationGate {
    pub fn new(session: SessionState) -> Self {
        Self { session }
    }

    pub fn on_appear(&self) -> GateDecision {
        if self.session.is_active() {
            GateDecision::ShowConversations
        } else {
            debug!("No active session, presenting sign-in");
            GateDecision::PresentSignIn
        }
    }
}
