//! Application state shared across all route handlers.
//!
//! AppState holds references to the engine and shared resources. It is
//! passed to handlers via axum's State extractor.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use solace_chat::ChatEngine;
use solace_core::config::SolaceConfig;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks. The engine
/// itself is stateless, so it needs no lock.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Mutex<SolaceConfig>>,
    /// The responder pipeline.
    pub engine: Arc<ChatEngine>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the given components.
    pub fn new(config: SolaceConfig, engine: ChatEngine) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
            engine: Arc::new(engine),
            start_time: Instant::now(),
        }
    }
}
