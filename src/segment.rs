//! Sentence segmentation for journal entries.
//!
//! A sentence boundary is any run of `.`, `!`, `?` or newline. Runs collapse to a
//! single boundary, segments are trimmed, and empty segments are dropped.

/// Characters that end a sentence.
pub const SENTENCE_DELIMITERS: [char; 4] = ['.', '!', '?', '\n'];

/// Split `text` into trimmed, non-empty sentences in their original order.
///
/// The returned slices borrow from `text`. An empty result means the entry carries
/// nothing to classify.
///
/// ```rust
/// use valence_core::segment::split_sentences;
///
/// let s = split_sentences("Got the job!! Nervous though...\n\n  ");
/// assert_eq!(s, ["Got the job", "Nervous though"]);
/// ```
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(&SENTENCE_DELIMITERS[..])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
