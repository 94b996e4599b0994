//! Keyword-matched knowledge corpus.
//!
//! Retrieval is literal substring containment against a fixed ordered list
//! of topic keywords. Corpus order is a contract: when text mentions
//! several topics, the earliest entry wins.

/// A single topical entry in the knowledge corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeEntry {
    /// Stable identifier.
    pub id: u32,
    /// Lowercase keyword matched against incoming text.
    pub topic: String,
    /// Explanatory text returned to the user.
    pub content: String,
}

/// Fixed ordered corpus searched by keyword containment.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// The built-in wellbeing corpus, in priority order.
    pub fn builtin() -> Self {
        let entry = |id, topic: &str, content: &str| KnowledgeEntry {
            id,
            topic: topic.to_string(),
            content: content.to_string(),
        };
        Self {
            entries: vec![
                entry(
                    1,
                    "anxiety",
                    "Anxiety is a normal and often healthy emotion. However, when a person \
                     regularly feels disproportionate levels of anxiety, it might become a \
                     medical disorder. Techniques like deep breathing, mindfulness, and \
                     cognitive behavioral therapy can help manage anxiety.",
                ),
                entry(
                    2,
                    "depression",
                    "Depression is a common and serious medical illness that negatively \
                     affects how you feel, the way you think, and how you act. It's \
                     characterized by persistent feelings of sadness and loss of interest in \
                     activities once enjoyed. It's important to seek professional help if \
                     experiencing symptoms of depression.",
                ),
                entry(
                    3,
                    "stress",
                    "Stress is your body's reaction to pressure from a certain situation or \
                     event. It can be positive as a short-term motivator but can negatively \
                     impact health when chronic. Stress management techniques include regular \
                     exercise, adequate sleep, and relaxation practices.",
                ),
                entry(
                    4,
                    "mindfulness",
                    "Mindfulness is the practice of purposely focusing your attention on the \
                     present moment and accepting it without judgment. Regular mindfulness \
                     practice can reduce stress, improve focus, and increase emotional \
                     regulation.",
                ),
                entry(
                    5,
                    "self_care",
                    "Self-care means taking the time to do things that help you live well and \
                     improve both your physical health and mental health. Self-care can \
                     include maintaining a regular sleep routine, eating healthy, spending \
                     time in nature, or engaging in hobbies.",
                ),
            ],
        }
    }

    /// Corpus built from caller-supplied entries, in the given order.
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Self {
        Self { entries }
    }

    /// Content of the first entry whose topic occurs in the case-folded
    /// input, or `None` when nothing matches. `None` is a normal outcome,
    /// not an error; an empty corpus never matches.
    pub fn retrieve(&self, text: &str) -> Option<&str> {
        let folded = text.to_lowercase();
        self.entries
            .iter()
            .find(|e| folded.contains(e.topic.as_str()))
            .map(|e| e.content.as_str())
    }

    /// The entries in priority order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
