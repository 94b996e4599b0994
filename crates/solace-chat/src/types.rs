use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Which side of the conversation produced a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

// =============================================================================
// Structs
// =============================================================================

/// Echo of the utterance the responder received, stamped at handling time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTurn {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// The reply produced by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotTurn {
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    pub distress_detected: bool,
}

/// One complete request/reply round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    pub message: UserTurn,
    pub response: BotTurn,
}

/// Raw composer output, before timestamps are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingResponse {
    pub text: String,
    pub distress_detected: bool,
}
