use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{BOARD_SIZE, CellState, OutOfBounds, Position, position::CELL_COUNT};

const X: CellState = CellState::Invalid;
const O: CellState = CellState::Occupied;
const E: CellState = CellState::Empty;

/// The starting cross layout: every playable cell holds a peg except the center.
#[rustfmt::skip]
pub const INITIAL_LAYOUT: [[CellState; BOARD_SIZE as usize]; BOARD_SIZE as usize] = [
    [X, X, O, O, O, X, X],
    [X, X, O, O, O, X, X],
    [O, O, O, O, O, O, O],
    [O, O, O, E, O, O, O],
    [O, O, O, O, O, O, O],
    [X, X, O, O, O, X, X],
    [X, X, O, O, O, X, X],
];

/// Number of cells that belong to the cross.
pub const PLAYABLE_CELLS: usize = 33;

/// Number of pegs on a freshly set-up board.
pub const INITIAL_PEGS: usize = 32;

/// Errors produced when building a board from text or from a peg list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The notation did not contain exactly 49 cell characters.
    #[display("expected 49 cells, found {len}")]
    InvalidLength {
        /// Number of cell characters found.
        len: usize,
    },
    /// The notation contained a character other than `#`, `o`, `.` or whitespace.
    #[display("invalid cell character {ch:?}")]
    InvalidChar {
        /// The offending character.
        ch: char,
    },
    /// A cell disagrees with the fixed cross layout.
    #[display("cell {position} does not match the cross layout")]
    LayoutMismatch {
        /// The offending cell.
        position: Position,
    },
}

/// The 7×7 peg board.
///
/// The set of [`CellState::Invalid`] cells always matches [`INITIAL_LAYOUT`];
/// only the occupied/empty state of playable cells ever changes.
///
/// # Examples
///
/// ```
/// use pegboard_core::{Board, CellState, Position};
///
/// let board = Board::new();
/// assert_eq!(board.peg_count(), 32);
/// assert_eq!(board.cell(Position::CENTER), CellState::Empty);
/// assert!(!board.is_valid_position(0, 0));
/// assert!(board.is_valid_position(0, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [CellState; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board in the starting layout.
    #[must_use]
    pub fn new() -> Self {
        let mut cells = [CellState::Invalid; CELL_COUNT];
        for pos in Position::ALL {
            cells[pos.index()] = layout_state(pos);
        }
        Self { cells }
    }

    /// Creates a cross with no pegs at all.
    #[must_use]
    pub fn cleared() -> Self {
        let mut board = Self::new();
        for pos in Position::ALL {
            if board.cell(pos).is_occupied() {
                board.set(pos, CellState::Empty);
            }
        }
        board
    }

    /// Creates a board whose only pegs sit at `pegs`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::LayoutMismatch`] if a peg lies outside the cross.
    ///
    /// # Examples
    ///
    /// ```
    /// use pegboard_core::{Board, Position};
    ///
    /// let board = Board::from_pegs([Position::new(1, 3), Position::new(2, 3)]).unwrap();
    /// assert_eq!(board.peg_count(), 2);
    /// assert!(Board::from_pegs([Position::new(0, 0)]).is_err());
    /// ```
    pub fn from_pegs<I>(pegs: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Position>,
    {
        let mut board = Self::cleared();
        for position in pegs {
            if !board.cell(position).is_playable() {
                return Err(BoardError::LayoutMismatch { position });
            }
            board.set(position, CellState::Occupied);
        }
        Ok(board)
    }

    /// Returns `true` iff `(row, col)` is on the grid and part of the cross.
    #[must_use]
    pub fn is_valid_position(&self, row: usize, col: usize) -> bool {
        Position::try_new(row, col).is_ok_and(|pos| self.cell(pos).is_playable())
    }

    /// Returns the state of the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if either coordinate is outside 0-6.
    pub fn cell_state(&self, row: usize, col: usize) -> Result<CellState, OutOfBounds> {
        Position::try_new(row, col).map(|pos| self.cell(pos))
    }

    /// Returns the state of the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    pub(crate) fn set(&mut self, pos: Position, state: CellState) {
        debug_assert!(
            self.cells[pos.index()].is_playable() && state.is_playable(),
            "the cross layout is fixed"
        );
        self.cells[pos.index()] = state;
    }

    /// Iterates over the positions holding a peg, in row-major order.
    pub fn pegs(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.cell(pos).is_occupied())
    }

    /// Returns the number of pegs on the board.
    #[must_use]
    pub fn peg_count(&self) -> usize {
        self.pegs().count()
    }
}

fn layout_state(pos: Position) -> CellState {
    INITIAL_LAYOUT[usize::from(pos.row())][usize::from(pos.col())]
}

impl Index<Position> for Board {
    type Output = CellState;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [CellState::Invalid; CELL_COUNT];
        let mut len = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let state = CellState::from_char(ch).ok_or(BoardError::InvalidChar { ch })?;
            if len < cells.len() {
                cells[len] = state;
            }
            len += 1;
        }
        if len != cells.len() {
            return Err(BoardError::InvalidLength { len });
        }
        for position in Position::ALL {
            if cells[position.index()].is_playable() != layout_state(position).is_playable() {
                return Err(BoardError::LayoutMismatch { position });
            }
        }
        Ok(Self { cells })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(usize::from(BOARD_SIZE)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
