use pegboard_core::{JumpError, OutOfBounds, Position};

/// Errors reported by [`Game`](crate::Game) operations.
///
/// None of these are fatal.
/// [`Game::handle_cell_activation`](crate::Game::handle_cell_activation) turns them
/// into ignored or rejected activations.
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
pub enum GameError {
    /// Coordinates outside the 7×7 grid.
    #[display("{_0}")]
    OutOfBounds(OutOfBounds),
    /// The requested jump breaks the rules.
    #[display("illegal move: {_0}")]
    IllegalMove(JumpError),
    /// The session has ended; only a reset is accepted.
    #[display("the game is over; reset to play again")]
    InvalidStateTransition,
    /// The target cell holds no peg.
    #[display("cell {position} has no peg to select")]
    NotSelectable {
        /// Requested cell.
        position: Position,
    },
    /// Another cell is already selected.
    #[display("cell {selected} is already selected")]
    AlreadySelected {
        /// The current selection.
        selected: Position,
    },
}

impl From<OutOfBounds> for GameError {
    fn from(err: OutOfBounds) -> Self {
        Self::OutOfBounds(err)
    }
}

impl From<JumpError> for GameError {
    fn from(err: JumpError) -> Self {
        Self::IllegalMove(err)
    }
}
