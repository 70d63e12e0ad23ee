use pegboard_core::{Board, CellState, Jump, JumpError, OutOfBounds, Position};

use crate::{GameError, GameOutcome, Session};

/// Result of feeding one cell activation to [`Game::handle_cell_activation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum ActivationOutcome {
    /// Nothing changed.
    Ignored,
    /// The cell was selected.
    Selected(Position),
    /// The previous selection was cleared.
    Deselected(Position),
    /// The selection moved to another peg.
    Reselected {
        /// Previous selection.
        from: Position,
        /// New selection.
        to: Position,
    },
    /// The selected peg jumped; `game_over` is set if this move ended the game.
    Moved {
        /// The applied jump.
        jump: Jump,
        /// Present when the move ended the game.
        game_over: Option<GameOutcome>,
    },
    /// The move was illegal; the selection was cleared and the board is unchanged.
    Rejected(JumpError),
}

impl ActivationOutcome {
    /// Returns `true` if the activation changed any state.
    #[must_use]
    pub fn changed_state(self) -> bool {
        !self.is_ignored()
    }
}

/// Result of a successful [`Game::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The applied jump.
    pub jump: Jump,
    /// Present when the move ended the game.
    pub game_over: Option<GameOutcome>,
}

/// A peg solitaire game: board, session counters and selection.
///
/// Every state transition happens synchronously inside one method call. The game
/// owns no timer; an external scheduler drives the clock through
/// [`tick`](Self::tick).
///
/// # Example
///
/// ```
/// use pegboard_game::Game;
///
/// let mut game = Game::new();
///
/// // Select the peg at (3, 1), then activate the empty center.
/// assert!(game.handle_cell_activation(3, 1).is_selected());
/// assert!(game.handle_cell_activation(3, 3).is_moved());
///
/// assert_eq!(game.session().remaining_pieces(), 31);
/// assert_eq!(game.session().moves_count(), 1);
/// assert!(game.session().is_active());
/// assert_eq!(game.selected(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    session: Session,
    selected: Option<Position>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game on the starting board.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Creates an idle game from an arbitrary position.
    ///
    /// The remaining piece count is taken from the board's peg count.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let session = Session::new(board.peg_count());
        Self {
            board,
            session,
            selected: None,
        }
    }

    /// Discards all progress and returns to the starting board.
    pub fn reset(&mut self) {
        log::debug!("resetting game");
        *self = Self::new();
    }

    /// Returns the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the session counters and phase.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the selected cell, if any.
    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    /// Returns `true` iff `(row, col)` is part of the cross.
    #[must_use]
    pub fn is_valid_position(&self, row: usize, col: usize) -> bool {
        self.board.is_valid_position(row, col)
    }

    /// Returns the state of the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if either coordinate is outside 0-6.
    pub fn cell_state(&self, row: usize, col: usize) -> Result<CellState, OutOfBounds> {
        self.board.cell_state(row, col)
    }

    /// Returns `true` if the jump from `(from_row, from_col)` to `(to_row, to_col)` is legal.
    #[must_use]
    pub fn check_valid_move(
        &self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> bool {
        self.board
            .check_valid_move(from_row, from_col, to_row, to_col)
    }

    /// Returns `true` if any legal jump remains. Read-only.
    #[must_use]
    pub fn has_valid_moves(&self) -> bool {
        self.board.has_valid_moves()
    }

    /// Validates and applies the jump from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStateTransition`] if the game is over, or
    /// [`GameError::IllegalMove`] if the jump breaks the rules.
    pub fn try_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, GameError> {
        if self.session.phase().is_ended() {
            return Err(GameError::InvalidStateTransition);
        }
        let jump = self.board.check_jump(from, to)?;
        self.apply_move(jump)
    }

    /// Applies a jump obtained from [`Board::check_jump`] on this game's board.
    ///
    /// Starts the session on the first move, updates the counters, and ends the
    /// session if the game is over.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStateTransition`] if the game is already over.
    pub fn apply_move(&mut self, jump: Jump) -> Result<MoveOutcome, GameError> {
        self.session.start()?;
        self.board.apply_jump(jump);
        self.session.record_move();
        log::debug!(
            "{} -> {} captured {}; {} pegs left",
            jump.source(),
            jump.destination(),
            jump.captured(),
            self.session.remaining_pieces()
        );
        debug_assert_eq!(self.board.peg_count(), self.session.remaining_pieces());

        Ok(MoveOutcome {
            jump,
            game_over: self.check_game_over(),
        })
    }

    fn check_game_over(&mut self) -> Option<GameOutcome> {
        if !self.session.is_active() {
            return None;
        }
        if self.session.remaining_pieces() == 1 || !self.has_valid_moves() {
            return Some(self.session.end());
        }
        None
    }

    /// Selects the peg at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::AlreadySelected`] if a cell is already selected, or
    /// [`GameError::NotSelectable`] if `pos` holds no peg.
    pub fn select(&mut self, pos: Position) -> Result<(), GameError> {
        if let Some(selected) = self.selected {
            return Err(GameError::AlreadySelected { selected });
        }
        if !self.board.cell(pos).is_occupied() {
            return Err(GameError::NotSelectable { position: pos });
        }
        log::debug!("selected {pos}");
        self.selected = Some(pos);
        Ok(())
    }

    /// Clears the selection, returning the previously selected cell.
    pub fn deselect(&mut self) -> Option<Position> {
        self.selected.take()
    }

    /// Handles a click (or equivalent) on the cell at `(row, col)`.
    ///
    /// - With nothing selected, activating a peg selects it; anything else is ignored.
    /// - Activating the selected peg deselects it.
    /// - Activating another peg moves the selection there.
    /// - Activating an empty cell attempts a jump from the selection; the selection
    ///   is cleared whether or not the jump was legal.
    ///
    /// Out-of-grid coordinates and any activation after the game is over are ignored.
    pub fn handle_cell_activation(&mut self, row: usize, col: usize) -> ActivationOutcome {
        if self.session.phase().is_ended() {
            return ActivationOutcome::Ignored;
        }
        let Ok(target) = Position::try_new(row, col) else {
            log::debug!("ignoring activation outside the board at ({row}, {col})");
            return ActivationOutcome::Ignored;
        };
        let target_state = self.board.cell(target);

        let Some(selected) = self.selected else {
            return match self.select(target) {
                Ok(()) => ActivationOutcome::Selected(target),
                Err(_) => ActivationOutcome::Ignored,
            };
        };

        if selected == target {
            self.deselect();
            return ActivationOutcome::Deselected(selected);
        }

        match target_state {
            CellState::Occupied => {
                self.deselect();
                self.selected = Some(target);
                log::debug!("selection moved {selected} -> {target}");
                ActivationOutcome::Reselected {
                    from: selected,
                    to: target,
                }
            }
            CellState::Empty => {
                self.deselect();
                match self.board.check_jump(selected, target) {
                    Ok(jump) => match self.apply_move(jump) {
                        Ok(MoveOutcome { jump, game_over }) => {
                            ActivationOutcome::Moved { jump, game_over }
                        }
                        Err(_) => ActivationOutcome::Ignored,
                    },
                    Err(err) => {
                        log::debug!("rejected move: {err}");
                        ActivationOutcome::Rejected(err)
                    }
                }
            }
            CellState::Invalid => ActivationOutcome::Ignored,
        }
    }

    /// Advances the clock by one second if the session is active.
    ///
    /// Returns `true` if the elapsed time changed.
    pub fn tick(&mut self) -> bool {
        self.session.tick()
    }

    /// Returns the outcome once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.session.outcome()
    }
}
