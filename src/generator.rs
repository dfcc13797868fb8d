use rand::Rng;
use tracing::{debug, warn};

use crate::{
    error::Error,
    grid::{Grid, Placement},
    placement::place_word,
};

/// Words shorter than this are never placed.
pub const MIN_WORD_LENGTH: usize = 2;

/// What the selection loop produced: the grid before filling and every word placed in it, in placement order.
#[derive(Debug)]
pub(crate) struct Selection {
    pub grid: Grid,
    pub placed: Vec<(String, Placement)>,
}

/// Draws words at random from `words` and places them in a fresh `size` x `size` grid until `target` words are
/// in or the pool runs dry.
///
/// Every drawn word leaves the pool for good, whether it is too short, too long, cannot be placed within
/// `retries` attempts, or goes in. Only words that go in count toward `target`. Running dry before anything was
/// placed is an [Error::NoWordsPlaced].
pub(crate) fn select_words<R: Rng + ?Sized>(
    size: usize,
    words: &[String],
    target: usize,
    retries: usize,
    rng: &mut R,
) -> Result<Selection, Error> {
    let mut grid = Grid::new(size);
    let mut pool: Vec<&str> = words.iter().map(String::as_str).collect();
    let mut placed = Vec::with_capacity(target);

    while placed.len() < target {
        if pool.is_empty() {
            if placed.is_empty() {
                return Err(Error::NoWordsPlaced {
                    size,
                    candidates: words.len(),
                });
            }

            warn!(
                requested = target,
                placed = placed.len(),
                "ran out of words before reaching the requested count"
            );
            break;
        }

        let word = pool.remove(rng.gen_range(0..pool.len()));

        let len = word.chars().count();
        if !(MIN_WORD_LENGTH..=size).contains(&len) {
            debug!(word, len, size, "skipping word that cannot fit the grid");
            continue;
        }

        match place_word(&mut grid, word, retries, rng) {
            Some(placement) => {
                debug!(
                    word,
                    x = placement.begin.0,
                    y = placement.begin.1,
                    direction = %placement.direction,
                    "placed word"
                );
                placed.push((word.to_string(), placement));
            }
            None => debug!(word, retries, "giving up on word after every attempt conflicted"),
        }
    }

    Ok(Selection { grid, placed })
}
