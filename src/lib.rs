#![warn(missing_docs)]

//! # Word searches
//!
//! A crate that generates square word searches from a list of words. Words are drawn at random and placed along
//! any of the eight compass directions, sharing letters where they cross. Cells left over are filled with
//! letters drawn from the word list's own letter frequencies, so the filler blends in with the answers.
//!
//! ```
//! use word_search::{WordSearch, WordSearchConfig};
//!
//! let words = [String::from("cat"), String::from("dog")];
//! let word_search = WordSearch::new(&WordSearchConfig::new(5, &words)).unwrap();
//!
//! assert_eq!(word_search.words(), ["CAT", "DOG"]);
//! ```

mod direction;
mod error;
mod generator;
mod grid;
pub mod input;
mod letters;
mod placement;

use std::{fmt::Display, ops::Index};

use array2d::Array2D;
use rand::Rng;

pub use direction::{valid_directions, WordDirection};
pub use error::Error;
pub use generator::MIN_WORD_LENGTH;
pub use grid::Placement;
pub use input::WordCount;
pub use letters::LetterFrequencies;
pub use placement::WORD_RETRY;

/// The configuration for the word search. See [`WordSearch::new`] for details.
#[derive(Debug)]
pub struct WordSearchConfig<'a> {
    /// The side length of the square grid.
    pub size: usize,

    /// The list of words to draw from. Words are normalized with [`input::normalize`] before use.
    pub words: &'a [String],

    /// How many words to place.
    pub count: WordCount,

    /// How many placement attempts a word gets before it is dropped.
    pub retries: usize,
}

impl<'a> WordSearchConfig<'a> {
    /// A configuration that tries to place every word, with the default retry budget.
    pub fn new(size: usize, words: &'a [String]) -> Self {
        Self {
            size,
            words,
            count: WordCount::All,
            retries: WORD_RETRY,
        }
    }
}

/// Whether every requested word made it into the puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// As many words were placed as were requested.
    Complete,

    /// The word list ran out first; fewer words than requested were placed.
    Partial {
        /// Number of words that were asked for, after capping at the size of the list.
        requested: usize,

        /// Number of words actually placed.
        placed: usize,
    },
}

/// A word search object that contains a grid of characters and a list of each word and their positions within the grid.
///
/// The grid is addressed `(x, y)`: `x` is the column and `y` the row when displayed.
#[derive(Debug)]
pub struct WordSearch {
    grid: Array2D<char>,
    placements: Vec<(String, Placement)>,
    outcome: Outcome,
}

impl WordSearch {
    /// Creates and generates a new word search with the specified configuration, using the thread-local random
    /// number generator.
    ///
    /// Words that are shorter than [MIN_WORD_LENGTH] or longer than the grid are skipped, as are words that still
    /// conflict with the grid after `config.retries` attempts. If the list runs out before a single word is placed,
    /// [Error::NoWordsPlaced] is returned.
    pub fn new(config: &WordSearchConfig<'_>) -> Result<Self, Error> {
        Self::with_rng(config, &mut rand::thread_rng())
    }

    /// Same as [`WordSearch::new`], drawing all randomness from `rng`. The same seed yields the same puzzle.
    pub fn with_rng<R: Rng + ?Sized>(config: &WordSearchConfig<'_>, rng: &mut R) -> Result<Self, Error> {
        let words: Vec<String> = config.words.iter().map(|word| input::normalize(word)).collect();
        let letters = LetterFrequencies::new(&words);
        let requested = config.count.resolve(words.len());

        let selection = generator::select_words(config.size, &words, requested, config.retries, rng)?;

        let outcome = if selection.placed.len() == requested {
            Outcome::Complete
        } else {
            Outcome::Partial {
                requested,
                placed: selection.placed.len(),
            }
        };

        tracing::info!(
            size = config.size,
            requested,
            placed = selection.placed.len(),
            "generated word search"
        );

        let mut placements = selection.placed;
        placements.sort_by(|(a, _), (b, _)| a.cmp(b));

        Ok(Self {
            grid: selection.grid.fill(&letters, rng),
            placements,
            outcome,
        })
    }

    /// The side length of the word search grid.
    pub fn size(&self) -> usize {
        self.grid.num_rows()
    }

    /// Provides a reference to the inner word search grid, indexed `(x, y)`.
    pub fn grid(&self) -> &Array2D<char> {
        &self.grid
    }

    /// Gets the character at `(x, y)`, returning [`Option::None`] if the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.grid.get(x, y).copied()
    }

    /// The words hidden in the grid, sorted alphabetically.
    pub fn words(&self) -> Vec<&str> {
        self.placements.iter().map(|(word, _)| word.as_str()).collect()
    }

    /// The answer key: every hidden word with its location, sorted alphabetically by word.
    pub fn placements(&self) -> &[(String, Placement)] {
        &self.placements
    }

    /// Whether all requested words were placed.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl Index<(usize, usize)> for WordSearch {
    type Output = char;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for WordSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.size() {
            for x in 0..self.size() {
                write!(f, "{} ", self.grid[(x, y)])?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        writeln!(f, "List of words used:")?;
        for (word, _) in &self.placements {
            writeln!(f, "{}", word)?;
        }

        Ok(())
    }
}
