//! Intake persona.
//!
//! Collects exactly two facts (name, age) through structured tool calls,
//! then defers to the assistant. The handoff condition is re-evaluated
//! after every field write and fires exactly once, at the first write that
//! completes the pair.

use super::{Assistant, with_language_directive};
use callgate_core::config::SessionConfig;
use callgate_core::error::{CallgateError, Result};
use callgate_core::persona::{HandoffDirective, Persona, PersonaKind, ToolCall, ToolSpec};
use callgate_core::providers::SessionIo;
use callgate_core::session::SharedSessionData;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

const INSTRUCTIONS: &str = "You are an intake agent. Learn the user's name and age.";

pub struct Intake {
    data: SharedSessionData,
    config: Arc<SessionConfig>,
}

impl Intake {
    pub fn new(data: SharedSessionData, config: Arc<SessionConfig>) -> Self {
        Self { data, config }
    }

    /// Hands off to the assistant once both facts are present, otherwise
    /// leaves the intake persona active.
    async fn handoff_if_done(&self) -> HandoffDirective {
        let complete = self.data.read().await.is_intake_complete();
        if complete {
            info!("intake complete, handing off to assistant");
            HandoffDirective::HandoffTo {
                next: Box::new(Assistant::new(self.data.clone(), self.config.clone())),
                carry_context: true,
            }
        } else {
            debug!("intake still missing fields");
            HandoffDirective::Stay
        }
    }
}

#[async_trait]
impl Persona for Intake {
    fn kind(&self) -> PersonaKind {
        PersonaKind::Intake
    }

    fn instructions(&self) -> String {
        with_language_directive(INSTRUCTIONS, &self.config)
    }

    fn tools(&self) -> Vec<ToolSpec> {
        vec![
            ToolSpec {
                name: "record_name".to_string(),
                description: "Use this tool to record the user's name.".to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": { "name": { "type": "string" } },
                    "required": ["name"],
                }),
            },
            ToolSpec {
                name: "record_age".to_string(),
                description: "Use this tool to record the user's age.".to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": { "age": { "type": "integer" } },
                    "required": ["age"],
                }),
            },
        ]
    }

    async fn handle_tool(&self, _io: &SessionIo, call: &ToolCall) -> Result<HandoffDirective> {
        match call.name.as_str() {
            "record_name" => {
                let name = call.str_arg("name").ok_or_else(|| {
                    CallgateError::internal("record_name invoked without a name argument")
                })?;
                self.data.write().await.user_name = Some(name.to_string());
                info!("recorded user name");
                Ok(self.handoff_if_done().await)
            }
            "record_age" => {
                let age = call.u64_arg("age").ok_or_else(|| {
                    CallgateError::internal("record_age invoked without an age argument")
                })?;
                let age = u32::try_from(age)
                    .map_err(|_| CallgateError::internal("recorded age out of range"))?;
                self.data.write().await.age = Some(age);
                info!(age, "recorded user age");
                Ok(self.handoff_if_done().await)
            }
            other => {
                warn!(tool = %other, "ignoring unknown tool call");
                Ok(HandoffDirective::Stay)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callgate_core::session::SessionData;

    #[tokio::test]
    async fn test_handoff_requires_both_fields() {
        let data = SessionData::shared();
        let intake = Intake::new(data.clone(), Arc::new(SessionConfig::default()));

        assert!(intake.handoff_if_done().await.is_stay());

        data.write().await.user_name = Some("Ana".to_string());
        assert!(intake.handoff_if_done().await.is_stay());

        data.write().await.age = Some(30);
        match intake.handoff_if_done().await {
            HandoffDirective::HandoffTo { next, carry_context } => {
                assert_eq!(next.kind(), PersonaKind::Assistant);
                assert!(carry_context);
            }
            _ => panic!("expected handoff once both fields are present"),
        }
    }

    #[test]
    fn test_tool_schemas_name_required_fields() {
        let intake = Intake::new(SessionData::shared(), Arc::new(SessionConfig::default()));
        let tools = intake.tools();
        assert_eq!(tools[0].parameters["required"][0], "name");
        assert_eq!(tools[1].parameters["required"][0], "age");
    }
}
