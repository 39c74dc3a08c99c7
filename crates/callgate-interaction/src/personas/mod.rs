//! Concrete personas.
//!
//! Each persona is constructed fresh at activation with the shared session
//! data handle and the session configuration. A replaced instance is
//! dropped immediately and retains no further responsibility.

mod assistant;
mod consent;
mod intake;

pub use assistant::Assistant;
pub use consent::{ConsentGate, RECORDING_PROMPT, REFUSAL_FAREWELL};
pub use intake::Intake;

use callgate_core::config::SessionConfig;
use callgate_core::persona::{Persona, PersonaKind};
use callgate_core::session::SharedSessionData;
use std::sync::Arc;

/// Builds a persona of the given kind, wired to the session's shared
/// record and configuration.
pub fn build_persona(
    kind: PersonaKind,
    data: SharedSessionData,
    config: Arc<SessionConfig>,
) -> Box<dyn Persona> {
    match kind {
        PersonaKind::ConsentGate => Box::new(ConsentGate::new(data, config)),
        PersonaKind::Intake => Box::new(Intake::new(data, config)),
        PersonaKind::Assistant => Box::new(Assistant::new(data, config)),
    }
}

/// Appends the configured language directive to a persona's base
/// instructions, when one is set.
pub(crate) fn with_language_directive(base: &str, config: &SessionConfig) -> String {
    match config.language.as_deref() {
        Some(language) if !language.is_empty() => {
            format!("{} Always respond in {}.", base, language)
        }
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callgate_core::session::SessionData;

    #[test]
    fn test_build_persona_matches_kind() {
        let config = Arc::new(SessionConfig::default());
        for kind in [
            PersonaKind::ConsentGate,
            PersonaKind::Intake,
            PersonaKind::Assistant,
        ] {
            let persona = build_persona(kind, SessionData::shared(), config.clone());
            assert_eq!(persona.kind(), kind);
        }
    }

    #[test]
    fn test_language_directive() {
        let mut config = SessionConfig::default();
        assert_eq!(with_language_directive("Base.", &config), "Base.");

        config.language = Some("Spanish".to_string());
        assert_eq!(
            with_language_directive("Base.", &config),
            "Base. Always respond in Spanish."
        );
    }
}
