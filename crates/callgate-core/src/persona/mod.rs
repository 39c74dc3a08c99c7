//! Persona capability interface.
//!
//! A persona is a named conversational role: a system instruction string,
//! a set of callable tools, and optional lifecycle hooks. Exactly one
//! persona is active per session; tool handlers decide whether control
//! stays put, hands off to a successor, or the session terminates.
//!
//! # Module Structure
//!
//! - `model`: Persona identity (`PersonaKind`)
//! - `tool`: Tool declarations and invocations (`ToolSpec`, `ToolCall`)

mod model;
mod tool;

// Re-export public API
pub use model::PersonaKind;
pub use tool::{ToolCall, ToolSpec};

use crate::error::Result;
use crate::providers::SessionIo;
use crate::session::{ChatContext, ConversationMessage};
use async_trait::async_trait;
use tracing::warn;

/// Outcome of evaluating one tool call, dispatched by the orchestrator.
///
/// A handler returning `HandoffTo` performs an atomic transfer: the
/// current persona is deactivated and the returned instance activated in
/// the same step. `Terminate` ends the session outside the persona graph.
pub enum HandoffDirective {
    /// The active persona keeps control.
    Stay,
    /// Transfer control to a newly constructed successor.
    HandoffTo {
        next: Box<dyn Persona>,
        /// Whether the successor inherits the conversation so far
        carry_context: bool,
    },
    /// End the session; no further turns are processed.
    Terminate,
}

impl HandoffDirective {
    pub fn is_stay(&self) -> bool {
        matches!(self, Self::Stay)
    }
}

/// A conversational role with its own instructions, tools, and hooks.
///
/// Capability polymorphism, not inheritance: the orchestrator only ever
/// sees this interface. Hooks default to no-ops so minimal personas stay
/// minimal.
#[async_trait]
pub trait Persona: Send + Sync {
    /// Which role this persona plays.
    fn kind(&self) -> PersonaKind;

    /// System instructions supplied to the engine each turn.
    fn instructions(&self) -> String;

    /// Tools declared to the engine while this persona is active.
    fn tools(&self) -> Vec<ToolSpec> {
        Vec::new()
    }

    /// Runs when this persona becomes active.
    async fn on_enter(&self, _io: &SessionIo, _history: &mut ChatContext) -> Result<()> {
        Ok(())
    }

    /// Runs when the session closes gracefully while this persona is
    /// active. Not invoked on handoff; a replaced persona retains no
    /// further responsibility.
    async fn on_exit(&self, _io: &SessionIo, _history: &mut ChatContext) -> Result<()> {
        Ok(())
    }

    /// Runs after each completed user turn, before the engine generates
    /// its reply. The persona may append synthetic messages to ground the
    /// next generation.
    async fn on_user_turn_completed(
        &self,
        _history: &mut ChatContext,
        _new_message: &ConversationMessage,
    ) -> Result<()> {
        Ok(())
    }

    /// Evaluates one tool call issued by the engine.
    ///
    /// The default rejects nothing: unknown tools are logged and control
    /// stays with the active persona, mirroring the policy for ambiguous
    /// user input.
    async fn handle_tool(&self, _io: &SessionIo, call: &ToolCall) -> Result<HandoffDirective> {
        warn!(persona = %self.kind(), tool = %call.name, "ignoring unknown tool call");
        Ok(HandoffDirective::Stay)
    }
}
