use thiserror::Error;

/// An error that happened while reading input or creating the word search.
#[derive(Debug, Error)]
pub enum Error {
    /// The word pool ran dry before a single word could be placed, typically because every word is too short or
    /// too long for the grid.
    #[error("a {size} x {size} word search could not be generated from {candidates} words: all of them are too short, too long, or would not fit")]
    NoWordsPlaced {
        /// Side length of the grid that was attempted.
        size: usize,
        /// Number of words that were available to draw from.
        candidates: usize,
    },

    /// The word list source contained no lines at all.
    #[error("word list is empty")]
    EmptyWordList,

    /// The requested number of words was neither a positive integer nor `all`.
    #[error("invalid word count {0:?}: expected a positive integer or \"all\"")]
    InvalidWordCount(String),

    /// Reading the word list failed.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}
