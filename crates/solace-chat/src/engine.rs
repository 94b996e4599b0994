//! Chat engine: validates the utterance, runs the composer, and shapes the
//! echo/reply pair handed back to the transport layer.

use chrono::Utc;

use solace_core::config::SolaceConfig;

use crate::composer::ResponseComposer;
use crate::distress::DistressDetector;
use crate::error::ChatError;
use crate::knowledge::KnowledgeBase;
use crate::phrases::{PhraseBank, PhraseSelector, RandomSelector};
use crate::types::{BotTurn, ChatExchange, Sender, UserTurn};

/// Speaker name used when a request does not name one.
pub const DEFAULT_SPEAKER_NAME: &str = "User";

/// Single-turn chat engine.
///
/// Holds no conversation state: every call is an independent pass through
/// the pipeline, so one instance can serve any number of concurrent
/// requests without coordination.
pub struct ChatEngine<S: PhraseSelector = RandomSelector> {
    composer: ResponseComposer<S>,
    default_speaker_name: String,
}

impl ChatEngine<RandomSelector> {
    /// Engine with the built-in corpus, lexicon, and phrase bank.
    pub fn new() -> Self {
        Self::with_composer(
            ResponseComposer::new(
                DistressDetector::new(),
                KnowledgeBase::builtin(),
                PhraseBank::builtin(),
            ),
            DEFAULT_SPEAKER_NAME,
        )
    }

    /// Engine configured from the application config: extra distress
    /// phrases extend the lexicon and the default speaker name comes from
    /// the chat section.
    pub fn from_config(config: &SolaceConfig) -> Self {
        Self::with_composer(
            ResponseComposer::new(
                DistressDetector::with_extra_phrases(&config.safety.extra_distress_phrases),
                KnowledgeBase::builtin(),
                PhraseBank::builtin(),
            ),
            config.chat.default_speaker_name.clone(),
        )
    }
}

impl Default for ChatEngine<RandomSelector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PhraseSelector> ChatEngine<S> {
    /// Engine around a caller-built composer.
    pub fn with_composer(
        composer: ResponseComposer<S>,
        default_speaker_name: impl Into<String>,
    ) -> Self {
        Self {
            composer,
            default_speaker_name: default_speaker_name.into(),
        }
    }

    /// Handle one utterance and produce the echo/reply pair.
    ///
    /// The only rejected input is the empty string; whitespace-only text
    /// passes through to the pipeline. Both turns carry the same
    /// handling-time timestamp.
    pub fn handle_utterance(
        &self,
        message: &str,
        speaker_name: Option<&str>,
    ) -> Result<ChatExchange, ChatError> {
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let speaker = speaker_name.unwrap_or(&self.default_speaker_name);
        let reply = self.composer.compose(message, speaker);
        if reply.distress_detected {
            tracing::info!("Distress indicators detected in incoming message");
        } else {
            tracing::debug!(distress = false, "Reply composed");
        }

        let timestamp = Utc::now();
        Ok(ChatExchange {
            message: UserTurn {
                text: message.to_string(),
                sender: Sender::User,
                timestamp,
            },
            response: BotTurn {
                text: reply.text,
                sender: Sender::Bot,
                timestamp,
                distress_detected: reply.distress_detected,
            },
        })
    }
}
