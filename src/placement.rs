use rand::Rng;

use crate::{
    direction::{valid_directions, WordDirection},
    grid::{Grid, Placement},
};

/// Number of times a word's placement is attempted before the word is given up on.
pub const WORD_RETRY: usize = 100;

/// Why a single placement attempt did not go through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlacementError {
    /// A cell on the path holds a different letter or lies outside the grid.
    Conflict,

    /// No direction fits from the sampled start cell.
    NoValidDirection,
}

/// Picks a start cell for a word of `len` letters.
///
/// Short words may start anywhere. Long words start near an edge on each axis so that at least one direction
/// per axis has room.
pub(crate) fn sample_start<R: Rng + ?Sized>(size: usize, len: usize, rng: &mut R) -> (usize, usize) {
    if len < size / 2 + 1 {
        return (rng.gen_range(0..size), rng.gen_range(0..size));
    }

    let mut near_edge = || {
        if rng.gen_bool(0.5) {
            rng.gen_range(0..=size - len)
        } else {
            size - 1 - rng.gen_range(0..=size - len)
        }
    };

    let x = near_edge();
    let y = near_edge();
    (x, y)
}

/// Writes `word` along `placement` if every cell on the path is blank or already holds the matching letter.
///
/// The path is checked in full before anything is written, so a conflict leaves the grid untouched.
pub(crate) fn try_place(grid: &mut Grid, word: &str, placement: &Placement) -> Result<(), PlacementError> {
    let indices = placement.indices();

    for (ch, &(x, y)) in word.chars().zip(&indices) {
        match grid.get(x, y) {
            Some(None) => {}
            Some(Some(existing)) if existing == ch => {}
            _ => return Err(PlacementError::Conflict),
        }
    }

    for (ch, &coord) in word.chars().zip(&indices) {
        grid.set(coord, ch);
    }

    Ok(())
}

/// One attempt: sample a start cell and a direction that fits, then try to write the word there.
pub(crate) fn attempt<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    rng: &mut R,
) -> Result<Placement, PlacementError> {
    let size = grid.size();
    let len = word.chars().count();
    if len > size {
        return Err(PlacementError::Conflict);
    }

    let begin = sample_start(size, len, rng);

    let directions = valid_directions(begin.0, begin.1, size, len);
    if directions.is_empty() {
        tracing::error!(
            word,
            x = begin.0,
            y = begin.1,
            size,
            "internal inconsistency: no direction fits from sampled start cell"
        );
        return Err(PlacementError::NoValidDirection);
    }

    let direction: WordDirection = directions[rng.gen_range(0..directions.len())];
    let placement = Placement::new(begin, len, direction);

    try_place(grid, word, &placement)?;

    Ok(placement)
}

/// Tries to place `word` up to `retries` times, each time with a fresh start cell and direction.
pub(crate) fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    retries: usize,
    rng: &mut R,
) -> Option<Placement> {
    for _ in 0..retries {
        if let Ok(placement) = attempt(grid, word, rng) {
            return Some(placement);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn snapshot(grid: &Grid) -> Vec<Option<char>> {
        let size = grid.size();
        (0..size)
            .flat_map(|x| (0..size).map(move |y| (x, y)))
            .map(|(x, y)| grid.get(x, y).flatten())
            .collect()
    }

    #[test]
    fn writes_letters_along_path() {
        let mut grid = Grid::new(5);
        let placement = Placement::new((0, 4), 3, WordDirection::DiagonalUpRight);

        try_place(&mut grid, "CAT", &placement).unwrap();

        assert_eq!(grid.get(0, 4), Some(Some('C')));
        assert_eq!(grid.get(1, 3), Some(Some('A')));
        assert_eq!(grid.get(2, 2), Some(Some('T')));
        assert_eq!(grid.filled_cells(), 3);
    }

    #[test]
    fn shared_matching_letter_is_allowed() {
        let mut grid = Grid::new(5);
        try_place(&mut grid, "CAT", &Placement::new((0, 1), 3, WordDirection::Right)).unwrap();

        let crossing = Placement::new((1, 0), 3, WordDirection::Down);
        assert_eq!(try_place(&mut grid, "BAD", &crossing), Ok(()));
        assert_eq!(grid.filled_cells(), 5);
    }

    #[test]
    fn late_conflict_leaves_grid_untouched() {
        let mut grid = Grid::new(5);
        try_place(&mut grid, "DOG", &Placement::new((0, 4), 3, WordDirection::Right)).unwrap();
        let before = snapshot(&grid);

        // the last letter lands on the 'O' of DOG
        let placement = Placement::new((1, 0), 5, WordDirection::Down);
        assert_eq!(
            try_place(&mut grid, "HOUSE", &placement),
            Err(PlacementError::Conflict)
        );

        assert_eq!(snapshot(&grid), before);
    }

    #[test]
    fn path_off_grid_is_a_conflict() {
        let mut grid = Grid::new(3);
        let placement = Placement::new((1, 1), 3, WordDirection::Left);

        assert_eq!(
            try_place(&mut grid, "CAT", &placement),
            Err(PlacementError::Conflict)
        );
        assert_eq!(grid.filled_cells(), 0);
    }

    #[test]
    fn long_word_start_flips_edge_before_offset() {
        let (size, len) = (7, 5);

        for seed in 0..50 {
            let mut replay = StdRng::seed_from_u64(seed);
            let mut axis = || {
                let low = replay.gen_bool(0.5);
                let offset = replay.gen_range(0..=size - len);
                if low {
                    offset
                } else {
                    size - 1 - offset
                }
            };
            let expected = (axis(), axis());

            let start = sample_start(size, len, &mut StdRng::seed_from_u64(seed));

            assert_eq!(start, expected, "seed {seed}");
        }
    }

    #[test]
    fn long_word_start_always_has_a_direction() {
        let mut rng = StdRng::seed_from_u64(11);

        for size in 1..=9 {
            for len in 1..=size {
                for _ in 0..200 {
                    let (x, y) = sample_start(size, len, &mut rng);
                    assert!(x < size && y < size);
                    assert!(
                        !valid_directions(x, y, size, len).is_empty(),
                        "size {size}, len {len}, start ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn same_seed_same_placements() {
        let words = ["APPLE", "PEAR", "PLUM", "FIG"];

        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(6);
            let placements: Vec<_> = words
                .iter()
                .map(|word| place_word(&mut grid, word, WORD_RETRY, &mut rng))
                .collect();
            (placements, snapshot(&grid))
        };

        assert_eq!(run(99), run(99));
    }

    #[test]
    fn letters_are_never_overwritten() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut grid = Grid::new(6);
        let words = ["BANANA", "CHERRY", "MANGO", "LEMON", "KIWI", "LIME", "DATE", "OLIVE"];

        for word in words {
            let before = snapshot(&grid);
            place_word(&mut grid, word, WORD_RETRY, &mut rng);
            let after = snapshot(&grid);

            for (old, new) in before.iter().zip(&after) {
                if old.is_some() {
                    assert_eq!(old, new);
                }
            }
        }
    }

    #[test]
    fn unplaceable_word_gives_up() {
        let mut grid = Grid::new(2);
        try_place(&mut grid, "AB", &Placement::new((0, 0), 2, WordDirection::Right)).unwrap();
        try_place(&mut grid, "CD", &Placement::new((0, 1), 2, WordDirection::Right)).unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(place_word(&mut grid, "XY", WORD_RETRY, &mut rng), None);
    }
}
