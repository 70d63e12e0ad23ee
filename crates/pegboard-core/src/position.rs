//! Board coordinates and jump directions.

use std::fmt::{self, Display};

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: u8 = 7;

pub(crate) const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Error returned when a coordinate pair lies outside the 7×7 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("position ({row}, {col}) is outside the 7x7 board")]
pub struct OutOfBounds {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

/// A cell coordinate on the 7×7 grid.
///
/// A `Position` is always inside the grid, but it may still refer to one of the
/// corner cells that are not part of the cross. Use
/// [`Board::is_valid_position`](crate::Board::is_valid_position) to check
/// playability.
///
/// # Examples
///
/// ```
/// use pegboard_core::{Direction, Position};
///
/// let pos = Position::new(3, 1);
/// assert_eq!(pos.step(Direction::Right, 2), Some(Position::CENTER));
/// assert_eq!(pos.step(Direction::Left, 2), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// The center cell, which starts empty.
    pub const CENTER: Self = Self::new(3, 3);

    /// All 49 grid positions in row-major order.
    pub const ALL: [Self; CELL_COUNT] = {
        let mut all = [Self { row: 0, col: 0 }; CELL_COUNT];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < CELL_COUNT {
            all[i] = Self {
                row: (i / BOARD_SIZE as usize) as u8,
                col: (i % BOARD_SIZE as usize) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from row and column indices.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-6.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "Position must be within the 7x7 board"
        );
        Self { row, col }
    }

    /// Creates a position from raw (possibly untrusted) coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if either coordinate is 7 or greater.
    pub fn try_new(row: usize, col: usize) -> Result<Self, OutOfBounds> {
        match (u8::try_from(row), u8::try_from(col)) {
            (Ok(r), Ok(c)) if r < BOARD_SIZE && c < BOARD_SIZE => Ok(Self { row: r, col: c }),
            _ => Err(OutOfBounds { row, col }),
        }
    }

    /// Returns the row index (0-6).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index (0-6).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position `distance` cells away in `direction`, if it is on the grid.
    #[must_use]
    pub fn step(self, direction: Direction, distance: u8) -> Option<Self> {
        let distance = i8::try_from(distance).ok()?;
        let (d_row, d_col) = direction.delta();
        let row = self.row.checked_add_signed(d_row.checked_mul(distance)?)?;
        let col = self.col.checked_add_signed(d_col.checked_mul(distance)?)?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    pub(crate) const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four axis-aligned jump directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 6.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 6.
    Right,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the unit `(row, col)` offset of this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }
}
