//! Output mode selection by word count

use crate::core::models::OutputMode;

/// Inputs with at most this many words get the vocabulary breakdown
pub const VOCABULARY_MAX_WORDS: usize = 4;

/// Pick the output mode for a piece of text.
///
/// Counts whitespace-separated words; empty text counts as zero words and
/// therefore lands in vocabulary mode.
pub fn classify(text: &str) -> OutputMode {
    if text.split_whitespace().count() <= VOCABULARY_MAX_WORDS {
        OutputMode::Vocabulary
    } else {
        OutputMode::Sentence
    }
}
