/// The direction a word is placed in inside the word search grid.
///
/// Coordinates are `(x, y)` with `y` growing downward, so [WordDirection::Up] steps toward row zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordDirection {
    /// The word goes up from the start position (north).
    Up,

    /// The word goes diagonally up and right from the start position (north-east).
    DiagonalUpRight,

    /// The word goes right from the start position (east).
    Right,

    /// The word goes diagonally down and right from the start position (south-east).
    DiagonalDownRight,

    /// The word goes down from the start position (south).
    Down,

    /// The word goes diagonally down and left from the start position (south-west).
    DiagonalDownLeft,

    /// The word goes left from the start position (west).
    Left,

    /// The word goes diagonally up and left from the start position (north-west).
    DiagonalUpLeft,
}

impl WordDirection {
    /// All eight directions, clockwise starting from [WordDirection::Up].
    pub const ALL: [WordDirection; 8] = [
        WordDirection::Up,
        WordDirection::DiagonalUpRight,
        WordDirection::Right,
        WordDirection::DiagonalDownRight,
        WordDirection::Down,
        WordDirection::DiagonalDownLeft,
        WordDirection::Left,
        WordDirection::DiagonalUpLeft,
    ];

    /// The `(dx, dy)` step taken from one letter of a word to the next.
    pub fn step(self) -> (isize, isize) {
        use WordDirection::*;

        match self {
            Up => (0, -1),
            DiagonalUpRight => (1, -1),
            Right => (1, 0),
            DiagonalDownRight => (1, 1),
            Down => (0, 1),
            DiagonalDownLeft => (-1, 1),
            Left => (-1, 0),
            DiagonalUpLeft => (-1, -1),
        }
    }

    /// Short compass label, used when printing the answer key.
    pub fn compass(self) -> &'static str {
        use WordDirection::*;

        match self {
            Up => "N",
            DiagonalUpRight => "NE",
            Right => "E",
            DiagonalDownRight => "SE",
            Down => "S",
            DiagonalDownLeft => "SW",
            Left => "W",
            DiagonalUpLeft => "NW",
        }
    }
}

impl std::fmt::Display for WordDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.compass())
    }
}

/// Whether a word of `len` letters fits along one axis when stepping by `sign` from `start`.
fn axis_fits(sign: isize, start: usize, size: usize, len: usize) -> bool {
    match sign {
        -1 => start + 1 >= len,
        1 => size.saturating_sub(start) >= len,
        _ => true,
    }
}

/// Returns every direction along which a word of `len` letters, starting at `(start_x, start_y)`, stays inside a
/// `size` x `size` grid. The result keeps the order of [WordDirection::ALL] and may be empty.
pub fn valid_directions(start_x: usize, start_y: usize, size: usize, len: usize) -> Vec<WordDirection> {
    WordDirection::ALL
        .into_iter()
        .filter(|direction| {
            let (dx, dy) = direction.step();
            axis_fits(dx, start_x, size, len) && axis_fits(dy, start_y, size, len)
        })
        .collect()
}
