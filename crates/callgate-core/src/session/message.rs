//! Conversation message types.
//!
//! This module contains types for representing the conversation history:
//! message roles, individual messages, and the ordered context owned by
//! the session (not by any single persona).

use serde::{Deserialize, Serialize};

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    Assistant,
    /// System-generated message.
    System,
    /// Tool-call scaffolding recorded by the controller.
    Tool,
}

/// A single message in a conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}

impl ConversationMessage {
    /// Creates a message with the given role, stamped now.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn tool(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Tool, content)
    }
}

/// The ordered conversation history for one session.
///
/// Owned by the session and handed to whichever persona is active. A
/// persona may read it, append synthetic messages, and the controller
/// carries it forward (possibly filtered) across handoffs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatContext {
    messages: Vec<ConversationMessage>,
}

impl ChatContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message.
    pub fn push(&mut self, message: ConversationMessage) {
        self.messages.push(message);
    }

    /// Appends a message built from a role and content.
    pub fn add_message(&mut self, role: MessageRole, content: impl Into<String>) {
        self.push(ConversationMessage::new(role, content));
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }

    /// Drops tool-call scaffolding, keeping only user/assistant/system
    /// turns. Used when carry-forward at handoff excludes tool messages.
    pub fn retain_conversational(&mut self) {
        self.messages
            .retain(|message| message.role != MessageRole::Tool);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut context = ChatContext::new();
        assert!(context.is_empty());

        context.push(ConversationMessage::user("hello"));
        context.add_message(MessageRole::Assistant, "hi there");

        assert_eq!(context.len(), 2);
        assert_eq!(context.last().unwrap().role, MessageRole::Assistant);
    }

    #[test]
    fn test_retain_conversational_drops_tool_messages() {
        let mut context = ChatContext::new();
        context.push(ConversationMessage::user("yes"));
        context.push(ConversationMessage::tool("consent_given({})"));
        context.push(ConversationMessage::assistant("great"));

        context.retain_conversational();

        assert_eq!(context.len(), 2);
        assert!(
            context
                .messages()
                .iter()
                .all(|m| m.role != MessageRole::Tool)
        );
    }

    #[test]
    fn test_messages_are_timestamped() {
        let message = ConversationMessage::system("joined");
        assert!(!message.timestamp.is_empty());
    }
}
