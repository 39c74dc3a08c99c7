//! External collaborator ports.
//!
//! The controller talks to three external services through the traits in
//! this module: the response engine (generation + tool calling), the
//! speech provider (direct utterances, VAD/noise configuration), and the
//! room transport (session lifetime). Implementations live outside the
//! core; tests supply scripted mocks.

use crate::config::{NoiseCancellationConfig, VadConfig};
use crate::error::Result;
use crate::persona::{ToolCall, ToolSpec};
use crate::session::ChatContext;
use async_trait::async_trait;
use std::sync::Arc;

/// One round of engine work requested for the active persona.
#[derive(Debug, Clone)]
pub struct TurnRequest<'a> {
    /// The active persona's system instructions
    pub instructions: String,
    /// Tools declared for this turn
    pub tools: Vec<ToolSpec>,
    /// Conversation history so far, including the just-completed user turn
    pub history: &'a ChatContext,
}

/// What the engine produced for one user turn.
#[derive(Debug, Clone, Default)]
pub struct TurnResponse {
    /// Generated reply text, if the engine chose to answer directly
    pub reply: Option<String>,
    /// Tool invocations, evaluated sequentially by the controller
    pub tool_calls: Vec<ToolCall>,
}

/// The language-generation and tool-invocation engine.
#[async_trait]
pub trait ResponseEngine: Send + Sync {
    /// Produces the next turn: a reply, tool calls, or both.
    async fn next_turn(&self, request: TurnRequest<'_>) -> Result<TurnResponse>;

    /// Produces a single directed reply from an ad-hoc instruction,
    /// used for greetings and farewells.
    async fn generate_reply(&self, instructions: &str, history: &ChatContext) -> Result<String>;
}

/// The speech synthesis/transcription provider.
#[async_trait]
pub trait SpeechOutput: Send + Sync {
    /// Warm-up hook invoked once before any session starts.
    async fn prewarm(&self) -> Result<()> {
        Ok(())
    }

    /// Applies voice and audio-pipeline configuration at session start.
    /// The settings are opaque to the controller.
    async fn configure(
        &self,
        voice: &str,
        vad: &VadConfig,
        noise_cancellation: &NoiseCancellationConfig,
    ) -> Result<()>;

    /// Emits a fixed utterance verbatim, bypassing generation.
    async fn say(&self, text: &str) -> Result<()>;
}

/// The room/session transport.
#[async_trait]
pub trait RoomTransport: Send + Sync {
    /// Joins the given room at session bootstrap.
    async fn connect(&self, room: &str) -> Result<()>;

    /// Deletes the room, ending the call for all participants.
    async fn delete_room(&self, room: &str) -> Result<()>;
}

/// The collaborator bundle handed to persona hooks and tool handlers.
#[derive(Clone)]
pub struct SessionIo {
    pub engine: Arc<dyn ResponseEngine>,
    pub speech: Arc<dyn SpeechOutput>,
    pub transport: Arc<dyn RoomTransport>,
    /// Identity of the room this session is bound to
    pub room: String,
}

impl SessionIo {
    pub fn new(
        engine: Arc<dyn ResponseEngine>,
        speech: Arc<dyn SpeechOutput>,
        transport: Arc<dyn RoomTransport>,
        room: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            speech,
            transport,
            room: room.into(),
        }
    }

    /// Emits a fixed utterance through the speech provider.
    pub async fn say(&self, text: &str) -> Result<()> {
        self.speech.say(text).await
    }

    /// Requests one directed generation from the engine.
    pub async fn generate_reply(
        &self,
        instructions: &str,
        history: &ChatContext,
    ) -> Result<String> {
        self.engine.generate_reply(instructions, history).await
    }

    /// Requests deletion of this session's room.
    pub async fn close_room(&self) -> Result<()> {
        self.transport.delete_room(&self.room).await
    }
}
