//! Reading and cleaning up word lists, and parsing how many words to use.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use crate::error::Error;

/// How many words the puzzle should try to include.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordCount {
    /// Every word in the list.
    #[default]
    All,

    /// A specific number of words, capped at the size of the list.
    Exactly(usize),
}

impl WordCount {
    /// The number of words to aim for out of `available`.
    pub fn resolve(self, available: usize) -> usize {
        match self {
            WordCount::All => available,
            WordCount::Exactly(n) => n.min(available),
        }
    }
}

impl FromStr for WordCount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("all") {
            return Ok(WordCount::All);
        }

        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(WordCount::Exactly(n)),
            _ => Err(Error::InvalidWordCount(s.to_string())),
        }
    }
}

/// Strips every character that is not an ASCII letter and uppercases the rest, so "ice cream!" becomes "ICECREAM".
pub fn normalize(word: &str) -> String {
    word.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// Reads one word or phrase per line. Lines are kept as written; see [normalize].
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>, Error> {
    let words = reader.lines().collect::<Result<Vec<_>, _>>()?;

    if words.is_empty() {
        return Err(Error::EmptyWordList);
    }

    Ok(words)
}

/// Reads the word list at `path`, or standard input when `path` is `-`.
pub fn load_words(path: &Path) -> Result<Vec<String>, Error> {
    if path.as_os_str() == "-" {
        read_words(std::io::stdin().lock())
    } else {
        read_words(BufReader::new(File::open(path)?))
    }
}
