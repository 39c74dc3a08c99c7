//! Session orchestration.
//!
//! `AgentSession` is the top-level driver for one call: it owns the
//! conversation history and the single active persona, forwards each
//! user turn to the response engine, and applies the handoff directives
//! that tool handlers return. Turns are strictly sequential; nothing in
//! this module is evaluated concurrently within a session.

use crate::personas::build_persona;
use callgate_core::config::SessionConfig;
use callgate_core::error::{CallgateError, Result};
use callgate_core::persona::{HandoffDirective, Persona, PersonaKind};
use callgate_core::providers::{ResponseEngine, RoomTransport, SessionIo, SpeechOutput, TurnRequest};
use callgate_core::session::{
    ChatContext, ConversationMessage, SessionData, SessionState, SharedSessionData,
};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Drives one call session from consent to termination.
///
/// `AgentSession` is responsible for:
/// - Creating the single shared session record
/// - Activating the initial persona and applying handoffs atomically
/// - Forwarding user turns to the response engine with the active
///   persona's instructions and tools
/// - Dispatching tool calls back to the active persona, one at a time
/// - Terminating the session (best-effort room deletion) and rejecting
///   everything that arrives afterwards
pub struct AgentSession {
    /// Unique session identifier (UUID format)
    id: String,
    config: Arc<SessionConfig>,
    /// The one fact record shared with every persona of this session
    data: SharedSessionData,
    /// Conversation history, owned by the session
    history: ChatContext,
    /// The single active persona; `None` before start and after termination
    active: Option<Box<dyn Persona>>,
    state: SessionState,
    io: SessionIo,
}

impl AgentSession {
    /// Creates a session bound to a room, with its collaborators wired in.
    ///
    /// The session is inert until [`start`](Self::start) is called.
    pub fn new(
        room: impl Into<String>,
        config: SessionConfig,
        engine: Arc<dyn ResponseEngine>,
        speech: Arc<dyn SpeechOutput>,
        transport: Arc<dyn RoomTransport>,
    ) -> Self {
        let config = Arc::new(config);
        Self {
            id: Uuid::new_v4().to_string(),
            data: SessionData::shared(),
            history: ChatContext::new(),
            active: None,
            state: SessionState::for_persona(config.initial_persona),
            io: SessionIo::new(engine, speech, transport, room),
            config,
        }
    }

    /// Configures the speech pipeline, connects the transport, and
    /// activates the initial persona.
    ///
    /// # Errors
    ///
    /// Returns an error if the session was already started or any
    /// collaborator fails during bootstrap.
    pub async fn start(&mut self) -> Result<()> {
        if self.active.is_some() {
            return Err(CallgateError::internal("session already started"));
        }
        if self.state.is_terminated() {
            return Err(CallgateError::SessionClosed);
        }

        self.io
            .speech
            .configure(
                &self.config.voice,
                &self.config.vad,
                &self.config.noise_cancellation,
            )
            .await?;
        self.io.transport.connect(&self.io.room).await?;

        let persona = build_persona(
            self.config.initial_persona,
            self.data.clone(),
            self.config.clone(),
        );
        self.state = SessionState::for_persona(persona.kind());
        info!(session = %self.id, persona = %persona.kind(), "session started");

        self.active = Some(persona);
        if let Some(persona) = self.active.as_ref() {
            persona.on_enter(&self.io, &mut self.history).await?;
        }
        Ok(())
    }

    /// Processes one transcribed user turn.
    ///
    /// The turn is appended to the history, the active persona's per-turn
    /// hook runs, the engine produces the next round (reply and/or tool
    /// calls), and tool calls are evaluated sequentially. The first
    /// non-stay directive wins; tool calls issued after it are dropped.
    ///
    /// Returns the engine's reply text, when the session is still open
    /// and one was produced.
    ///
    /// # Errors
    ///
    /// Returns `SessionClosed` once the session has terminated; any
    /// further turns are rejected.
    pub async fn handle_user_turn(&mut self, text: &str) -> Result<Option<String>> {
        if self.state.is_terminated() {
            return Err(CallgateError::SessionClosed);
        }

        let message = ConversationMessage::user(text);
        self.history.push(message.clone());

        let persona = self
            .active
            .as_ref()
            .ok_or_else(|| CallgateError::internal("no active persona"))?;
        persona
            .on_user_turn_completed(&mut self.history, &message)
            .await?;

        let request = TurnRequest {
            instructions: persona.instructions(),
            tools: persona.tools(),
            history: &self.history,
        };
        let response = self.io.engine.next_turn(request).await?;

        let mut directive = HandoffDirective::Stay;
        for call in &response.tool_calls {
            if !directive.is_stay() {
                warn!(tool = %call.name, "dropping tool call issued after a transition directive");
                continue;
            }
            self.history
                .push(ConversationMessage::tool(format!(
                    "{} {}",
                    call.name, call.arguments
                )));
            let persona = self
                .active
                .as_ref()
                .ok_or_else(|| CallgateError::internal("no active persona"))?;
            directive = persona.handle_tool(&self.io, call).await?;
        }

        match directive {
            HandoffDirective::Stay => {}
            HandoffDirective::HandoffTo {
                next,
                carry_context,
            } => self.perform_handoff(next, carry_context).await?,
            HandoffDirective::Terminate => self.terminate().await,
        }

        if self.state.is_terminated() {
            return Ok(None);
        }
        if let Some(reply) = response.reply {
            self.history
                .push(ConversationMessage::assistant(reply.clone()));
            return Ok(Some(reply));
        }
        Ok(None)
    }

    /// Closes the session gracefully from outside the persona graph:
    /// the active persona's exit hook runs (the assistant's farewell),
    /// then the room is deleted. Idempotent.
    pub async fn shutdown(&mut self) -> Result<()> {
        if self.state.is_terminated() {
            return Ok(());
        }
        info!(session = %self.id, "shutting down session");
        if let Some(persona) = self.active.as_ref() {
            persona.on_exit(&self.io, &mut self.history).await?;
        }
        self.terminate().await;
        Ok(())
    }

    /// Atomic transfer: the predecessor is dropped and the successor
    /// activated in the same step. The shared session record is never
    /// cloned or reset; only the conversation carry-forward is governed
    /// by the directive and configuration.
    async fn perform_handoff(
        &mut self,
        next: Box<dyn Persona>,
        carry_context: bool,
    ) -> Result<()> {
        let next_state = SessionState::for_persona(next.kind());
        if state_rank(next_state) < state_rank(self.state) {
            return Err(CallgateError::internal(format!(
                "refusing backward handoff from {:?} to {:?}",
                self.state, next_state
            )));
        }

        let predecessor = self.active.take().map(|persona| persona.kind());
        info!(session = %self.id, from = ?predecessor, to = %next.kind(), "persona handoff");

        if !carry_context {
            self.history = ChatContext::new();
        } else if !self.config.carry_tool_messages {
            self.history.retain_conversational();
        }

        self.state = next_state;
        self.active = Some(next);
        if let Some(persona) = self.active.as_ref() {
            persona.on_enter(&self.io, &mut self.history).await?;
        }
        Ok(())
    }

    /// Unconditional termination. Room deletion is best-effort: a
    /// transport failure is logged and the session still closes.
    async fn terminate(&mut self) {
        info!(session = %self.id, "terminating session");
        self.active = None;
        self.state = SessionState::Terminated;
        if let Err(error) = self.io.close_room().await {
            warn!(session = %self.id, %error, "room deletion failed");
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn room(&self) -> &str {
        &self.io.room
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The role currently owning the conversation, if any.
    pub fn active_kind(&self) -> Option<PersonaKind> {
        self.active.as_ref().map(|persona| persona.kind())
    }

    pub fn history(&self) -> &ChatContext {
        &self.history
    }

    /// A copy of the current session record.
    pub async fn data_snapshot(&self) -> SessionData {
        self.data.read().await.clone()
    }
}

fn state_rank(state: SessionState) -> u8 {
    match state {
        SessionState::ConsentPending => 0,
        SessionState::Collecting => 1,
        SessionState::Assisting => 2,
        SessionState::Terminated => 3,
    }
}
