//! Worker bootstrap helpers.
//!
//! The composition root a process shell uses to start sessions: tracing
//! initialization, provider warm-up, and session construction. Everything
//! here consumes an explicit [`SessionConfig`]; no environment is read
//! besides the log filter.

use crate::session::AgentSession;
use callgate_core::config::SessionConfig;
use callgate_core::error::Result;
use callgate_core::providers::{ResponseEngine, RoomTransport, SpeechOutput};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber with an env-filter
/// (`RUST_LOG`), defaulting to `info`. Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Static inputs for one worker-managed session.
#[derive(Debug, Clone)]
pub struct WorkerOptions {
    /// Room identity received from the transport at dispatch
    pub room: String,
    pub config: SessionConfig,
}

impl WorkerOptions {
    pub fn new(room: impl Into<String>, config: SessionConfig) -> Self {
        Self {
            room: room.into(),
            config,
        }
    }
}

/// Loads a session configuration from a TOML file.
///
/// # Errors
///
/// Returns an `Io` error if the file cannot be read, or a
/// `Serialization` error if it is not a valid configuration document.
pub fn load_config(path: &Path) -> Result<SessionConfig> {
    let text = std::fs::read_to_string(path)?;
    SessionConfig::from_toml_str(&text)
}

/// Warms up the speech provider, then constructs and starts a session.
///
/// # Errors
///
/// Returns an error if warm-up or any bootstrap step fails; a session is
/// never returned half-started.
pub async fn run_session(
    options: WorkerOptions,
    engine: Arc<dyn ResponseEngine>,
    speech: Arc<dyn SpeechOutput>,
    transport: Arc<dyn RoomTransport>,
) -> Result<AgentSession> {
    speech.prewarm().await?;
    info!(room = %options.room, "speech provider warmed up, starting session");

    let mut session = AgentSession::new(options.room, options.config, engine, speech, transport);
    session.start().await?;
    Ok(session)
}
