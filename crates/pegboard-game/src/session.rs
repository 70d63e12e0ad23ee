use std::{
    fmt::{self, Display},
    time::Instant,
};

use crate::GameError;

/// Lifecycle phase of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum SessionPhase {
    /// No move has been made yet; the clock is stopped at zero.
    Idle,
    /// At least one move has been made and the game is not over.
    Active,
    /// The game is over. Terminal until the game is reset.
    Ended,
}

/// Counters and clock for one play-through.
///
/// The session never measures time on its own: the elapsed time only advances
/// when [`tick`](Self::tick) is called while the session is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    phase: SessionPhase,
    remaining_pieces: usize,
    moves_count: usize,
    elapsed_seconds: u32,
    started_at: Option<Instant>,
}

impl Session {
    /// Creates an idle session for a board holding `remaining_pieces` pegs.
    #[must_use]
    pub fn new(remaining_pieces: usize) -> Self {
        Self {
            phase: SessionPhase::Idle,
            remaining_pieces,
            moves_count: 0,
            elapsed_seconds: 0,
            started_at: None,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns `true` while the clock is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase.is_active()
    }

    /// Number of pegs left on the board.
    #[must_use]
    pub fn remaining_pieces(&self) -> usize {
        self.remaining_pieces
    }

    /// Number of moves made so far.
    #[must_use]
    pub fn moves_count(&self) -> usize {
        self.moves_count
    }

    /// Whole seconds elapsed since the first move.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }

    /// The instant of the first move, if any move has been made.
    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Starts the clock if the session is idle.
    ///
    /// Starting an already active session does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStateTransition`] if the session has ended.
    pub(crate) fn start(&mut self) -> Result<(), GameError> {
        match self.phase {
            SessionPhase::Idle => {
                self.phase = SessionPhase::Active;
                self.started_at = Some(Instant::now());
                log::info!("session started with {} pegs", self.remaining_pieces);
                Ok(())
            }
            SessionPhase::Active => Ok(()),
            SessionPhase::Ended => Err(GameError::InvalidStateTransition),
        }
    }

    pub(crate) fn record_move(&mut self) {
        debug_assert!(self.is_active());
        debug_assert!(self.remaining_pieces > 1);
        self.remaining_pieces -= 1;
        self.moves_count += 1;
    }

    /// Stops the clock and reports how the game finished.
    pub(crate) fn end(&mut self) -> GameOutcome {
        self.phase = SessionPhase::Ended;
        let outcome = self.snapshot_outcome();
        log::info!(
            "game over: victory={} remaining={} moves={} time={}",
            outcome.is_victory,
            outcome.remaining_pieces,
            outcome.moves_count,
            ClockTime(outcome.elapsed_seconds),
        );
        outcome
    }

    /// Advances the clock by one second if the session is active.
    ///
    /// Returns `true` if the elapsed time changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);
        true
    }

    /// Returns the final outcome once the session has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.phase.is_ended().then(|| self.snapshot_outcome())
    }

    fn snapshot_outcome(&self) -> GameOutcome {
        GameOutcome {
            is_victory: self.remaining_pieces == 1,
            elapsed_seconds: self.elapsed_seconds,
            moves_count: self.moves_count,
            remaining_pieces: self.remaining_pieces,
        }
    }
}

/// Summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOutcome {
    /// `true` if exactly one peg remains.
    pub is_victory: bool,
    /// Clock value when the game ended.
    pub elapsed_seconds: u32,
    /// Number of moves made.
    pub moves_count: usize,
    /// Pegs left on the board.
    pub remaining_pieces: usize,
}

/// A duration in whole seconds, displayed as zero-padded `MM:SS`.
///
/// ```
/// use pegboard_game::ClockTime;
///
/// assert_eq!(ClockTime(75).to_string(), "01:15");
/// assert_eq!(ClockTime::or_placeholder(None), "--");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(pub u32);

impl ClockTime {
    /// Formats an optional time, using `--` when there is none.
    #[must_use]
    pub fn or_placeholder(seconds: Option<u32>) -> String {
        seconds.map_or_else(|| "--".to_owned(), |s| Self(s).to_string())
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}
