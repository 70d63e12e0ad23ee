use crate::{Board, CellState, Direction, Position};

/// A legal jump: a peg leaves its source, captures the peg it hops over, and lands
/// on the empty destination.
///
/// A `Jump` can only be obtained from [`Board::check_jump`] or
/// [`Board::legal_jumps`], so holding one means the move was legal on the board
/// it was checked against. Apply it right away; a later mutation of the board
/// may invalidate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Jump {
    from: Position,
    over: Position,
    to: Position,
}

impl Jump {
    /// Cell the peg leaves.
    #[must_use]
    pub const fn source(self) -> Position {
        self.from
    }

    /// Cell whose peg is captured.
    #[must_use]
    pub const fn captured(self) -> Position {
        self.over
    }

    /// Cell the peg lands on.
    #[must_use]
    pub const fn destination(self) -> Position {
        self.to
    }
}

/// Reason a requested jump is illegal.
///
/// Variants are listed in the order the conditions are checked.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum JumpError {
    /// The source is outside the grid or the cross.
    #[display("source {position} is not a playable cell")]
    SourceNotPlayable {
        /// Requested source.
        position: Position,
    },
    /// The destination is outside the grid or the cross.
    #[display("destination {position} is not a playable cell")]
    DestinationNotPlayable {
        /// Requested destination.
        position: Position,
    },
    /// The move is not exactly two cells along one axis.
    #[display("{from} -> {to} is not a straight two-cell jump")]
    NotStraightJump {
        /// Requested source.
        from: Position,
        /// Requested destination.
        to: Position,
    },
    /// There is no peg on the source cell.
    #[display("no peg at {position}")]
    SourceNotOccupied {
        /// Requested source.
        position: Position,
    },
    /// The destination already holds a peg.
    #[display("destination {position} is not empty")]
    DestinationNotEmpty {
        /// Requested destination.
        position: Position,
    },
    /// There is no peg between source and destination.
    #[display("no peg to jump over at {position}")]
    NothingToCapture {
        /// The midpoint cell.
        position: Position,
    },
}

impl Board {
    /// Validates a jump from `from` to `to`.
    ///
    /// Conditions are checked in this order: both endpoints playable, a straight
    /// two-cell displacement, a peg on the source, an empty destination, and a peg
    /// on the midpoint.
    ///
    /// # Errors
    ///
    /// Returns the [`JumpError`] for the first condition that fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use pegboard_core::{Board, Position};
    ///
    /// let board = Board::new();
    /// let jump = board.check_jump(Position::new(3, 1), Position::CENTER).unwrap();
    /// assert_eq!(jump.captured(), Position::new(3, 2));
    ///
    /// let err = board.check_jump(Position::new(3, 0), Position::new(3, 2)).unwrap_err();
    /// assert!(err.is_destination_not_empty());
    /// ```
    pub fn check_jump(&self, from: Position, to: Position) -> Result<Jump, JumpError> {
        if !self.cell(from).is_playable() {
            return Err(JumpError::SourceNotPlayable { position: from });
        }
        if !self.cell(to).is_playable() {
            return Err(JumpError::DestinationNotPlayable { position: to });
        }

        let d_row = i16::from(to.row()) - i16::from(from.row());
        let d_col = i16::from(to.col()) - i16::from(from.col());
        let straight = (d_row.abs() == 2 && d_col == 0) || (d_row == 0 && d_col.abs() == 2);
        if !straight {
            return Err(JumpError::NotStraightJump { from, to });
        }

        if !self.cell(from).is_occupied() {
            return Err(JumpError::SourceNotOccupied { position: from });
        }
        if !self.cell(to).is_empty() {
            return Err(JumpError::DestinationNotEmpty { position: to });
        }

        let over = Position::new(
            (from.row() + to.row()) / 2,
            (from.col() + to.col()) / 2,
        );
        if !self.cell(over).is_occupied() {
            return Err(JumpError::NothingToCapture { position: over });
        }

        Ok(Jump { from, over, to })
    }

    /// Returns `true` if moving from `(from_row, from_col)` to `(to_row, to_col)` is legal.
    ///
    /// Coordinates outside the grid simply yield `false`.
    #[must_use]
    pub fn check_valid_move(
        &self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> bool {
        let (Ok(from), Ok(to)) = (
            Position::try_new(from_row, from_col),
            Position::try_new(to_row, to_col),
        ) else {
            return false;
        };
        self.check_jump(from, to).is_ok()
    }

    /// Performs a checked jump: source and midpoint become empty, destination occupied.
    pub fn apply_jump(&mut self, jump: Jump) {
        debug_assert_eq!(self.check_jump(jump.from, jump.to), Ok(jump));
        self.set(jump.from, CellState::Empty);
        self.set(jump.over, CellState::Empty);
        self.set(jump.to, CellState::Occupied);
    }

    /// Iterates over every legal jump on the board.
    ///
    /// Pegs are visited in row-major order, and for each peg the directions in
    /// [`Direction::ALL`] order.
    pub fn legal_jumps(&self) -> impl Iterator<Item = Jump> + '_ {
        self.pegs().flat_map(move |from| {
            Direction::ALL.into_iter().filter_map(move |direction| {
                let to = from.step(direction, 2)?;
                self.check_jump(from, to).ok()
            })
        })
    }

    /// Returns `true` if at least one legal jump exists.
    ///
    /// This is a pure query; calling it repeatedly on an unchanged board always
    /// gives the same answer.
    #[must_use]
    pub fn has_valid_moves(&self) -> bool {
        self.legal_jumps().next().is_some()
    }
}
