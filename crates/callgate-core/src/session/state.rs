//! Session lifecycle state.

use crate::persona::PersonaKind;
use serde::{Deserialize, Serialize};

/// Lifecycle state of one call session.
///
/// The state follows the active persona forward only; there is no
/// backward transition, and `Terminated` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Waiting for explicit recording consent.
    ConsentPending,
    /// Collecting intake facts (name, age).
    Collecting,
    /// Open-ended assistance.
    Assisting,
    /// The session has ended; no further turns are processed.
    Terminated,
}

impl SessionState {
    /// The state implied by an active persona.
    pub fn for_persona(kind: PersonaKind) -> Self {
        match kind {
            PersonaKind::ConsentGate => Self::ConsentPending,
            PersonaKind::Intake => Self::Collecting,
            PersonaKind::Assistant => Self::Assisting,
        }
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_follows_persona() {
        assert_eq!(
            SessionState::for_persona(PersonaKind::ConsentGate),
            SessionState::ConsentPending
        );
        assert_eq!(
            SessionState::for_persona(PersonaKind::Intake),
            SessionState::Collecting
        );
        assert_eq!(
            SessionState::for_persona(PersonaKind::Assistant),
            SessionState::Assisting
        );
    }

    #[test]
    fn test_terminated() {
        assert!(SessionState::Terminated.is_terminated());
        assert!(!SessionState::Assisting.is_terminated());
    }
}
