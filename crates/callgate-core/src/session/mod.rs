//! Session domain module.
//!
//! This module contains the per-session state shared across personas:
//! the mutable fact record, the conversation history, and the session
//! lifecycle state.
//!
//! # Module Structure
//!
//! - `data`: The mutable fact record collected over the call (`SessionData`)
//! - `message`: Conversation types (`MessageRole`, `ConversationMessage`, `ChatContext`)
//! - `state`: Session lifecycle state (`SessionState`)

mod data;
mod message;
mod state;

// Re-export public API
pub use data::{SessionData, SharedSessionData};
pub use message::{ChatContext, ConversationMessage, MessageRole};
pub use state::SessionState;
