//! Reply composition.
//!
//! Runs the strict three-step pipeline: crisis acknowledgment, then
//! knowledge-grounded reply, then randomized supportive fallback. The first
//! step that produces a reply terminates the pass.

use crate::distress::DistressDetector;
use crate::knowledge::KnowledgeBase;
use crate::phrases::{PhraseBank, PhraseSelector, RandomSelector};
use crate::types::OutgoingResponse;

/// Fixed acknowledgment returned whenever crisis language is detected.
/// Downstream consumers match on this exact text; do not reword it.
pub const CRISIS_MESSAGE: &str = "I notice you may be going through a difficult time. \
     Remember that you're not alone, and help is available. Would you like me to \
     provide some crisis resources that might be helpful?";

/// Display labels checked against the folded text when naming the matched
/// topic. Checked in corpus order; text that reached retrieval but matches
/// none of these is labeled as self-care.
const TOPIC_LABELS: [(&str, &str); 4] = [
    ("anxiety", "anxiety"),
    ("depression", "depression"),
    ("stress", "stress"),
    ("mindfulness", "mindfulness"),
];

const FALLBACK_TOPIC_LABEL: &str = "self-care";

/// Combines the detector and knowledge base outputs with the fallback
/// phrase bank into the final reply.
pub struct ResponseComposer<S: PhraseSelector = RandomSelector> {
    detector: DistressDetector,
    knowledge: KnowledgeBase,
    phrases: PhraseBank,
    selector: S,
}

impl ResponseComposer<RandomSelector> {
    /// Composer using the thread RNG for fallback selection.
    pub fn new(detector: DistressDetector, knowledge: KnowledgeBase, phrases: PhraseBank) -> Self {
        Self::with_selector(detector, knowledge, phrases, RandomSelector)
    }
}

impl<S: PhraseSelector> ResponseComposer<S> {
    /// Composer with an injected phrase selector.
    pub fn with_selector(
        detector: DistressDetector,
        knowledge: KnowledgeBase,
        phrases: PhraseBank,
        selector: S,
    ) -> Self {
        Self {
            detector,
            knowledge,
            phrases,
            selector,
        }
    }

    /// Compose the reply for one utterance.
    ///
    /// Always returns a value; the only side effect is the randomness read
    /// on the fallback branch.
    pub fn compose(&self, text: &str, speaker_name: &str) -> OutgoingResponse {
        if self.detector.detect(text) {
            return OutgoingResponse {
                text: CRISIS_MESSAGE.to_string(),
                distress_detected: true,
            };
        }

        if let Some(content) = self.knowledge.retrieve(text) {
            return OutgoingResponse {
                text: format!(
                    "I understand you're asking about {}. {}",
                    topic_label(text),
                    content
                ),
                distress_detected: false,
            };
        }

        let text = if self.phrases.is_empty() {
            String::new()
        } else {
            let index = self.selector.pick(self.phrases.len());
            self.phrases.render(index, speaker_name)
        };
        OutgoingResponse {
            text,
            distress_detected: false,
        }
    }
}

/// Name the topic mentioned in `text`.
///
/// Re-derives the match instead of reusing retrieval's result. The priority
/// order mirrors the corpus declaration order, so on multi-topic text the
/// displayed label and the delivered content agree.
fn topic_label(text: &str) -> &'static str {
    let folded = text.to_lowercase();
    for (keyword, label) in TOPIC_LABELS {
        if folded.contains(keyword) {
            return label;
        }
    }
    FALLBACK_TOPIC_LABEL
}
