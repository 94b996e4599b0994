//! Supportive fallback phrases and the randomness seam.
//!
//! When no distress signal and no topic keyword is present, the reply is
//! drawn uniformly at random from a fixed bank of supportive templates.

use rand::Rng;

/// Placeholder replaced with the speaker's name when a phrase is rendered.
pub const SPEAKER_PLACEHOLDER: &str = "{speaker_name}";

/// Built-in supportive replies, in bank order.
pub const SUPPORTIVE_PHRASES: [&str; 5] = [
    "I hear you, {speaker_name}. How long have you been feeling this way?",
    "Thank you for sharing that with me. Would you like to talk more about what's on your mind?",
    "I'm here to support you. What do you think might help you feel better right now?",
    "That sounds challenging. Have you tried any coping strategies that have worked for you in the past?",
    "I appreciate you opening up. Remember that your feelings are valid, and it's okay to ask for help.",
];

/// Source of the index used to pick a fallback phrase.
///
/// Production uses the thread RNG; tests inject a deterministic selector so
/// composition is reproducible without touching global state.
pub trait PhraseSelector: Send + Sync {
    /// Pick an index in `0..len`. Only called with a non-zero `len`.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform selection from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl PhraseSelector for RandomSelector {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always picks the same index (modulo bank size). Test-oriented.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl PhraseSelector for FixedSelector {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Immutable ordered bank of supportive phrase templates.
#[derive(Debug, Clone)]
pub struct PhraseBank {
    phrases: Vec<String>,
}

impl PhraseBank {
    /// The built-in five-phrase bank.
    pub fn builtin() -> Self {
        Self {
            phrases: SUPPORTIVE_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Bank built from caller-supplied templates, in the given order.
    pub fn from_phrases(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    /// Render the phrase at `index`, substituting the speaker placeholder.
    pub fn render(&self, index: usize, speaker_name: &str) -> String {
        self.phrases[index].replace(SPEAKER_PLACEHOLDER, speaker_name)
    }

    /// The templates in bank order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
