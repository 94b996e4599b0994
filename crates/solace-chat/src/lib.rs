//! Conversational responder pipeline for Solace.
//!
//! Screens incoming text for crisis language, retrieves a topical knowledge
//! snippet by keyword containment, and composes the reply, falling back to a
//! randomized supportive phrase when nothing matches.

pub mod composer;
pub mod distress;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod phrases;
pub mod types;

pub use composer::{ResponseComposer, CRISIS_MESSAGE};
pub use distress::{DistressDetector, DISTRESS_LEXICON};
pub use engine::{ChatEngine, DEFAULT_SPEAKER_NAME};
pub use error::ChatError;
pub use knowledge::{KnowledgeBase, KnowledgeEntry};
pub use phrases::{
    FixedSelector, PhraseBank, PhraseSelector, RandomSelector, SUPPORTIVE_PHRASES,
};
pub use types::{BotTurn, ChatExchange, OutgoingResponse, Sender, UserTurn};
