//! Behavior layer for the callgate voice session controller.
//!
//! This crate provides the three concrete personas (consent gate, intake,
//! assistant), the per-session orchestrator that dispatches handoffs
//! between them, and the worker bootstrap helpers a process shell uses to
//! wire up providers and start a session.

pub mod bootstrap;
pub mod personas;
pub mod session;

pub use session::AgentSession;
