//! General assistant persona.
//!
//! Open-ended assistance once consent (and optionally intake) has
//! completed. Personalizes behavior through the shared session record:
//! each completed user turn re-grounds the conversation in the current
//! facts, and the closing farewell addresses the user by recorded name.

use super::with_language_directive;
use callgate_core::config::SessionConfig;
use callgate_core::error::Result;
use callgate_core::persona::{Persona, PersonaKind};
use callgate_core::providers::SessionIo;
use callgate_core::session::{ChatContext, ConversationMessage, SessionData, SharedSessionData};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

const INSTRUCTIONS: &str =
    "You are a helpful voice AI assistant. Greet the user with a warm welcome.";

const GREETING_INSTRUCTIONS: &str = "Greet the user with a warm welcome.";

pub struct Assistant {
    data: SharedSessionData,
    config: Arc<SessionConfig>,
}

impl Assistant {
    pub fn new(data: SharedSessionData, config: Arc<SessionConfig>) -> Self {
        Self { data, config }
    }
}

/// Farewell instruction for the closing generation. Falls back to a
/// generic address when no name was recorded.
fn farewell_instructions(data: &SessionData) -> String {
    match data.user_name.as_deref() {
        Some(name) if !name.is_empty() => {
            format!("Tell {} a friendly goodbye before you exit.", name)
        }
        _ => "Tell the user a friendly goodbye before you exit.".to_string(),
    }
}

#[async_trait]
impl Persona for Assistant {
    fn kind(&self) -> PersonaKind {
        PersonaKind::Assistant
    }

    fn instructions(&self) -> String {
        with_language_directive(INSTRUCTIONS, &self.config)
    }

    async fn on_enter(&self, io: &SessionIo, history: &mut ChatContext) -> Result<()> {
        if !self.config.greet_on_enter {
            return Ok(());
        }
        let greeting = io.generate_reply(GREETING_INSTRUCTIONS, history).await?;
        history.push(ConversationMessage::assistant(greeting));
        Ok(())
    }

    async fn on_exit(&self, io: &SessionIo, history: &mut ChatContext) -> Result<()> {
        let instructions = farewell_instructions(&*self.data.read().await);
        let farewell = io.generate_reply(&instructions, history).await?;
        history.push(ConversationMessage::assistant(farewell));
        Ok(())
    }

    async fn on_user_turn_completed(
        &self,
        history: &mut ChatContext,
        _new_message: &ConversationMessage,
    ) -> Result<()> {
        // Re-ground the next generation in the current session record.
        let note = self.data.read().await.grounding_note();
        debug!(%note, "injecting session record into context");
        history.push(ConversationMessage::assistant(note));
        Ok(())
    }
}
