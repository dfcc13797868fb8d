use array2d::Array2D;
use rand::Rng;

use crate::{direction::WordDirection, letters::LetterFrequencies};

/// Describes where a word's letters are placed in the word search grid. Includes a beginning coordinate, a length, and a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The starting `(x, y)` coordinate of the word.
    pub begin: (usize, usize),

    /// The length of the word.
    pub len: usize,

    /// The direction that the word goes in.
    pub direction: WordDirection,
}

impl Placement {
    /// Creates a new [Placement] with the given beginning coordinate, length, and direction.
    pub fn new(begin: (usize, usize), len: usize, direction: WordDirection) -> Self {
        Self {
            begin,
            len,
            direction,
        }
    }

    /// Returns all `(x, y)` indices of the grid that the word spans across, in letter order.
    ///
    /// A step that would leave the grid on the low side wraps to a huge index, which the grid rejects as out of bounds.
    pub fn indices(&self) -> Vec<(usize, usize)> {
        let (dx, dy) = self.direction.step();

        (0..self.len as isize)
            .map(|i| {
                (
                    self.begin.0.wrapping_add_signed(dx * i),
                    self.begin.1.wrapping_add_signed(dy * i),
                )
            })
            .collect()
    }
}

/// The square grid that words are placed into. Cells are addressed `(x, y)` and start out blank.
#[derive(Clone, Debug)]
pub(crate) struct Grid {
    cells: Array2D<Option<char>>,
}

impl Grid {
    /// Creates an all-blank grid with the given side length.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            cells: Array2D::filled_with(None, size, size),
        }
    }

    /// Side length of the grid.
    pub(crate) fn size(&self) -> usize {
        self.cells.num_rows()
    }

    /// Gets the cell at `(x, y)`: `None` when out of bounds, `Some(None)` when blank.
    pub(crate) fn get(&self, x: usize, y: usize) -> Option<Option<char>> {
        self.cells.get(x, y).copied()
    }

    pub(crate) fn set(&mut self, (x, y): (usize, usize), letter: char) {
        self.cells[(x, y)] = Some(letter);
    }

    /// Number of cells that hold a letter.
    #[cfg(test)]
    pub(crate) fn filled_cells(&self) -> usize {
        self.cells
            .elements_row_major_iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Consumes the grid, drawing one letter from `letters` for every cell that is still blank.
    pub(crate) fn fill<R: Rng + ?Sized>(self, letters: &LetterFrequencies, rng: &mut R) -> Array2D<char> {
        let size = self.size();
        let mut next = 0;

        Array2D::filled_by_row_major(
            || {
                let (x, y) = (next / size, next % size);
                next += 1;
                self.cells[(x, y)].unwrap_or_else(|| letters.sample(rng))
            },
            size,
            size,
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn indices_follow_direction() {
        let placement = Placement::new((4, 0), 3, WordDirection::DiagonalDownLeft);

        assert_eq!(placement.indices(), vec![(4, 0), (3, 1), (2, 2)]);
    }

    #[test]
    fn indices_leaving_grid_are_rejected() {
        let grid = Grid::new(3);
        let placement = Placement::new((0, 0), 2, WordDirection::Up);

        let (x, y) = placement.indices()[1];
        assert_eq!(grid.get(x, y), None);
    }

    #[test]
    fn fill_keeps_placed_letters() {
        let mut grid = Grid::new(3);
        grid.set((1, 2), 'Q');
        let letters = LetterFrequencies::new(["Z"]);

        let filled = grid.fill(&letters, &mut StdRng::seed_from_u64(7));

        assert_eq!(filled[(1, 2)], 'Q');
        assert_eq!(
            filled.elements_row_major_iter().filter(|&&c| c == 'Z').count(),
            8
        );
    }

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::new(4);

        assert_eq!(grid.size(), 4);
        assert_eq!(grid.filled_cells(), 0);
        assert_eq!(grid.get(3, 3), Some(None));
        assert_eq!(grid.get(4, 0), None);
    }
}
