//! Persona identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The conversational roles a session can hand control between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaKind {
    /// Gates the session on explicit recording consent.
    ConsentGate,
    /// Collects the user's name and age.
    Intake,
    /// Open-ended voice assistant.
    Assistant,
}

impl fmt::Display for PersonaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ConsentGate => "consent-gate",
            Self::Intake => "intake",
            Self::Assistant => "assistant",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(PersonaKind::ConsentGate.to_string(), "consent-gate");
        assert_eq!(PersonaKind::Intake.to_string(), "intake");
        assert_eq!(PersonaKind::Assistant.to_string(), "assistant");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&PersonaKind::ConsentGate).unwrap();
        assert_eq!(json, "\"consent_gate\"");
        let kind: PersonaKind = serde_json::from_str(&json).unwrap();
        assert_eq!(kind, PersonaKind::ConsentGate);
    }
}
