//! Solace API crate - axum HTTP server and route handlers.
//!
//! Provides the REST surface for the responder: sending an utterance,
//! reading (always-empty) history, and health checks. All decision logic
//! lives in `solace-chat`; this crate only shapes requests and responses.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
