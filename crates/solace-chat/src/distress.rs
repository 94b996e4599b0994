//! Crisis-language screening.
//!
//! Scans incoming text for phrases indicating possible self-harm or crisis
//! risk before any other processing happens.

/// Built-in crisis-indicator phrases.
///
/// Matched case-insensitively as literal substrings with no word-boundary
/// checks, so a hit inside an unrelated word (e.g. "hopelessness") counts.
pub const DISTRESS_LEXICON: [&str; 10] = [
    "suicide",
    "kill myself",
    "end my life",
    "don't want to live",
    "self-harm",
    "hurt myself",
    "cutting myself",
    "hopeless",
    "worthless",
    "no reason to live",
];

/// Detects crisis-indicator phrases in free text.
///
/// The phrase set is fixed at construction; detection is a pure function
/// of the input.
#[derive(Debug, Clone)]
pub struct DistressDetector {
    phrases: Vec<String>,
}

impl DistressDetector {
    /// Detector carrying only the built-in lexicon.
    pub fn new() -> Self {
        Self::with_extra_phrases(&[])
    }

    /// Detector carrying the built-in lexicon plus deployment-specific
    /// phrases. Extras are case-folded; empty entries are ignored.
    pub fn with_extra_phrases(extra: &[String]) -> Self {
        let mut phrases: Vec<String> =
            DISTRESS_LEXICON.iter().map(|p| p.to_string()).collect();
        phrases.extend(
            extra
                .iter()
                .filter(|p| !p.trim().is_empty())
                .map(|p| p.to_lowercase()),
        );
        Self { phrases }
    }

    /// Returns true iff any lexicon phrase occurs in the case-folded input.
    pub fn detect(&self, text: &str) -> bool {
        let folded = text.to_lowercase();
        self.phrases.iter().any(|p| folded.contains(p.as_str()))
    }

    /// Number of phrases in the lexicon.
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

impl Default for DistressDetector {
    fn default() -> Self {
        Self::new()
    }
}
