//! Error types for the responder pipeline.

use solace_core::error::SolaceError;

/// Errors from the chat engine.
///
/// The pipeline itself is total: once an utterance passes validation,
/// every path produces a reply.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
}

impl From<ChatError> for SolaceError {
    fn from(err: ChatError) -> Self {
        SolaceError::Chat(err.to_string())
    }
}
