//! Session configuration.
//!
//! All knobs a session consumes are collected here and passed in explicitly
//! at construction; nothing in the core reads process environment or global
//! state.

use crate::error::Result;
use crate::persona::PersonaKind;
use serde::{Deserialize, Serialize};

/// Voice-activity-detection settings, passed through to the speech provider.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VadConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Minimum voiced duration before a turn is considered started
    #[serde(default = "default_min_speech_ms")]
    pub min_speech_ms: u64,
    /// Silence duration that closes a user turn
    #[serde(default = "default_min_silence_ms")]
    pub min_silence_ms: u64,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_speech_ms: default_min_speech_ms(),
            min_silence_ms: default_min_silence_ms(),
        }
    }
}

/// Noise-cancellation settings, passed through to the speech provider.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NoiseCancellationConfig {
    /// Provider-specific mode identifier, e.g. "bvc" or "bvc-telephony"
    #[serde(default = "default_noise_mode")]
    pub mode: String,
}

impl Default for NoiseCancellationConfig {
    fn default() -> Self {
        Self {
            mode: default_noise_mode(),
        }
    }
}

/// Static inputs consumed at session construction.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// The persona that owns the conversation when the session starts
    #[serde(default = "default_initial_persona")]
    pub initial_persona: PersonaKind,
    /// The persona activated once consent has been given
    #[serde(default = "default_after_consent")]
    pub after_consent: PersonaKind,
    /// When set, every persona instructs the engine to respond in this language
    #[serde(default)]
    pub language: Option<String>,
    /// Voice identity selector for the speech provider
    #[serde(default = "default_voice")]
    pub voice: String,
    /// Whether the assistant requests a generated greeting on activation
    #[serde(default)]
    pub greet_on_enter: bool,
    /// Whether handoff carry-forward keeps tool-call scaffolding messages
    #[serde(default = "default_true")]
    pub carry_tool_messages: bool,
    #[serde(default)]
    pub vad: VadConfig,
    #[serde(default)]
    pub noise_cancellation: NoiseCancellationConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_persona: default_initial_persona(),
            after_consent: default_after_consent(),
            language: None,
            voice: default_voice(),
            greet_on_enter: false,
            carry_tool_messages: true,
            vad: VadConfig::default(),
            noise_cancellation: NoiseCancellationConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error if the document is not valid TOML or
    /// does not match the expected shape.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

fn default_true() -> bool {
    true
}

fn default_min_speech_ms() -> u64 {
    120
}

fn default_min_silence_ms() -> u64 {
    800
}

fn default_noise_mode() -> String {
    "bvc".to_string()
}

fn default_initial_persona() -> PersonaKind {
    PersonaKind::ConsentGate
}

fn default_after_consent() -> PersonaKind {
    PersonaKind::Assistant
}

fn default_voice() -> String {
    "coral".to_string()
}
