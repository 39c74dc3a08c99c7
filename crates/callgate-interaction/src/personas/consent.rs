//! Consent gate persona.
//!
//! Gates the entire session on explicit affirmative recording consent
//! before any data collection occurs. The consent prompt and the refusal
//! farewell are fixed compliance utterances emitted directly through the
//! speech provider, never generated.

use super::{build_persona, with_language_directive};
use callgate_core::config::SessionConfig;
use callgate_core::error::Result;
use callgate_core::persona::{HandoffDirective, Persona, PersonaKind, ToolCall, ToolSpec};
use callgate_core::providers::SessionIo;
use callgate_core::session::{ChatContext, SharedSessionData};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Spoken verbatim when the persona activates.
pub const RECORDING_PROMPT: &str = "May I record this call for quality assurance purposes?";

/// Spoken verbatim when consent is refused, before the room is deleted.
pub const REFUSAL_FAREWELL: &str = "Thank you for your time, have a wonderful day.";

const INSTRUCTIONS: &str = "You are a voice AI agent with the singular task to collect positive \
     recording consent from the user. If consent is not given, you must end the call.";

pub struct ConsentGate {
    data: SharedSessionData,
    config: Arc<SessionConfig>,
}

impl ConsentGate {
    pub fn new(data: SharedSessionData, config: Arc<SessionConfig>) -> Self {
        Self { data, config }
    }
}

#[async_trait]
impl Persona for ConsentGate {
    fn kind(&self) -> PersonaKind {
        PersonaKind::ConsentGate
    }

    fn instructions(&self) -> String {
        with_language_directive(INSTRUCTIONS, &self.config)
    }

    fn tools(&self) -> Vec<ToolSpec> {
        vec![
            ToolSpec::no_params(
                "consent_given",
                "Indicate that consent has been given and the call may proceed.",
            ),
            ToolSpec::no_params(
                "end_call",
                "Indicate that consent has not been given and the call should end.",
            ),
        ]
    }

    async fn on_enter(&self, io: &SessionIo, _history: &mut ChatContext) -> Result<()> {
        io.say(RECORDING_PROMPT).await
    }

    async fn handle_tool(&self, io: &SessionIo, call: &ToolCall) -> Result<HandoffDirective> {
        match call.name.as_str() {
            "consent_given" => {
                let successor = self.config.after_consent;
                info!(to = %successor, "consent received, handing off");
                Ok(HandoffDirective::HandoffTo {
                    next: build_persona(successor, self.data.clone(), self.config.clone()),
                    carry_context: true,
                })
            }
            "end_call" => {
                info!("consent refused, ending call");
                io.say(REFUSAL_FAREWELL).await?;
                Ok(HandoffDirective::Terminate)
            }
            other => {
                warn!(tool = %other, "ignoring unknown tool call");
                Ok(HandoffDirective::Stay)
            }
        }
    }
}
