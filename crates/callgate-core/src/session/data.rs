//! Session fact record.
//!
//! The single mutable container for facts collected during a call. One
//! instance exists per session; every persona holds the same shared handle
//! for the session's full lifetime.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the session's fact record.
///
/// Personas receive this at construction and never clone the record itself.
/// Tool handling is serialized per session, so writes never race.
pub type SharedSessionData = Arc<RwLock<SessionData>>;

/// Facts collected across the conversation.
///
/// Fields are set one at a time by tool calls; partial state is always
/// valid. The record is destroyed with the session and is never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// The user's name, once recorded
    pub user_name: Option<String>,
    /// The user's age, once recorded
    pub age: Option<u32>,
}

impl SessionData {
    /// Creates a fresh shared record for a new session.
    pub fn shared() -> SharedSessionData {
        Arc::new(RwLock::new(Self::default()))
    }

    /// Returns true once every intake field has been recorded.
    pub fn is_intake_complete(&self) -> bool {
        self.user_name.as_deref().is_some_and(|name| !name.is_empty()) && self.age.is_some()
    }

    /// Compact rendering of the record, injected into the conversation
    /// history so the next generation is grounded in current facts.
    pub fn grounding_note(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
