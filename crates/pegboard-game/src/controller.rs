use pegboard_core::{Board, Position};

use crate::{
    ActivationOutcome, BestTimeStore, BestTimeUpdate, Game, GameOutcome, Session, record_win,
};

/// Receives everything a front-end needs to draw the game.
///
/// The render methods are called after every state change; `notify_game_over`
/// is called exactly once per finished game.
pub trait GameObserver {
    /// Draws the board.
    fn render_board(&mut self, board: &Board);

    /// Highlights the selected cell, or clears the highlight.
    fn render_selection(&mut self, selected: Option<Position>);

    /// Shows remaining pegs, move count and elapsed time.
    fn render_stats(&mut self, session: &Session);

    /// Shows the stored best time.
    fn render_best_time(&mut self, _best_time: Option<u32>) {}

    /// Announces the end of the game.
    fn notify_game_over(&mut self, outcome: &GameOutcome, best_time: BestTimeUpdate);
}

impl<T> GameObserver for &mut T
where
    T: GameObserver + ?Sized,
{
    fn render_board(&mut self, board: &Board) {
        (**self).render_board(board);
    }

    fn render_selection(&mut self, selected: Option<Position>) {
        (**self).render_selection(selected);
    }

    fn render_stats(&mut self, session: &Session) {
        (**self).render_stats(session);
    }

    fn render_best_time(&mut self, best_time: Option<u32>) {
        (**self).render_best_time(best_time);
    }

    fn notify_game_over(&mut self, outcome: &GameOutcome, best_time: BestTimeUpdate) {
        (**self).notify_game_over(outcome, best_time);
    }
}

/// Shortcut keys understood by [`GameController::on_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCommand {
    /// Clear the selection.
    Escape,
    /// Start over.
    Reset,
}

/// Drives a [`Game`] from inbound events and reports to a [`GameObserver`].
///
/// This is the boundary between the game and its collaborators: the front-end
/// forwards clicks, reset requests and clock ticks, and the controller consults
/// the [`BestTimeStore`] when a game is won.
#[derive(Debug)]
pub struct GameController<S, O> {
    game: Game,
    store: S,
    observer: O,
}

impl<S, O> GameController<S, O>
where
    S: BestTimeStore,
    O: GameObserver,
{
    /// Creates a controller with a fresh game and draws the initial state.
    pub fn new(store: S, observer: O) -> Self {
        Self::with_game(Game::new(), store, observer)
    }

    /// Creates a controller around an existing game and draws its state.
    pub fn with_game(game: Game, store: S, observer: O) -> Self {
        let mut this = Self {
            game,
            store,
            observer,
        };
        this.render_all();
        this.observer.render_best_time(this.store.best_time());
        this
    }

    /// Returns the game.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the best-time store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Forwards a cell activation to the game.
    pub fn on_cell_activated(&mut self, row: usize, col: usize) -> ActivationOutcome {
        let outcome = self.game.handle_cell_activation(row, col);
        if outcome.changed_state() {
            self.render_all();
        }
        if let ActivationOutcome::Moved {
            game_over: Some(game_over),
            ..
        } = outcome
        {
            self.finish(&game_over);
        }
        outcome
    }

    /// Discards the current game and starts a new one.
    pub fn on_reset_requested(&mut self) {
        self.game.reset();
        self.render_all();
        self.observer.render_best_time(self.store.best_time());
    }

    /// Advances the clock by one second while the game is active.
    ///
    /// Returns `true` if the elapsed time changed.
    pub fn on_tick(&mut self) -> bool {
        let advanced = self.game.tick();
        if advanced {
            self.observer.render_stats(self.game.session());
        }
        advanced
    }

    /// Handles a shortcut key.
    ///
    /// Keys are ignored while the game is not running and nothing is selected.
    /// Returns `true` if the key had an effect.
    pub fn on_key(&mut self, key: KeyCommand) -> bool {
        if !self.game.session().is_active() && self.game.selected().is_none() {
            return false;
        }
        match key {
            KeyCommand::Escape => {
                let had_selection = self.game.deselect().is_some();
                if had_selection {
                    self.observer.render_selection(None);
                }
                had_selection
            }
            KeyCommand::Reset => {
                self.on_reset_requested();
                true
            }
        }
    }

    fn finish(&mut self, outcome: &GameOutcome) {
        let best_time = if outcome.is_victory {
            record_win(&mut self.store, outcome.elapsed_seconds)
        } else {
            BestTimeUpdate::NotRecorded
        };
        if best_time.is_improved() {
            self.observer.render_best_time(best_time.best());
        }
        self.observer.notify_game_over(outcome, best_time);
    }

    fn render_all(&mut self) {
        self.observer.render_board(self.game.board());
        self.observer.render_selection(self.game.selected());
        self.observer.render_stats(self.game.session());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryBestTimeStore;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Board(usize),
        Selection(Option<Position>),
        Stats {
            remaining: usize,
            moves: usize,
            elapsed: u32,
        },
        BestTime(Option<u32>),
        GameOver(GameOutcome, BestTimeUpdate),
    }

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<Event>,
    }

    impl Recorder {
        fn take(&mut self) -> Vec<Event> {
            std::mem::take(&mut self.events)
        }

        fn game_overs(&self) -> usize {
            self.events
                .iter()
                .filter(|e| matches!(e, Event::GameOver(..)))
                .count()
        }
    }

    impl GameObserver for Recorder {
        fn render_board(&mut self, board: &Board) {
            self.events.push(Event::Board(board.peg_count()));
        }

        fn render_selection(&mut self, selected: Option<Position>) {
            self.events.push(Event::Selection(selected));
        }

        fn render_stats(&mut self, session: &Session) {
            self.events.push(Event::Stats {
                remaining: session.remaining_pieces(),
                moves: session.moves_count(),
                elapsed: session.elapsed_seconds(),
            });
        }

        fn render_best_time(&mut self, best_time: Option<u32>) {
            self.events.push(Event::BestTime(best_time));
        }

        fn notify_game_over(&mut self, outcome: &GameOutcome, best_time: BestTimeUpdate) {
            self.events.push(Event::GameOver(*outcome, best_time));
        }
    }

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn two_peg_game() -> Game {
        Game::from_board(Board::from_pegs([pos(1, 3), pos(2, 3)]).unwrap())
    }

    #[test]
    fn test_initial_render() {
        let controller =
            GameController::new(MemoryBestTimeStore::new(Some(42)), Recorder::default());
        assert_eq!(
            controller.observer().events,
            [
                Event::Board(32),
                Event::Selection(None),
                Event::Stats {
                    remaining: 32,
                    moves: 0,
                    elapsed: 0
                },
                Event::BestTime(Some(42)),
            ]
        );
    }

    #[test]
    fn test_ignored_activation_renders_nothing() {
        let mut controller =
            GameController::new(MemoryBestTimeStore::default(), Recorder::default());
        controller.observer_mut().take();
        assert!(controller.on_cell_activated(3, 3).is_ignored());
        assert!(controller.observer().events.is_empty());
    }

    #[test]
    fn test_win_records_best_time_once() {
        let mut recorder = Recorder::default();
        let mut store = MemoryBestTimeStore::new(Some(100));
        let mut controller =
            GameController::with_game(two_peg_game(), &mut store, &mut recorder);

        controller.on_cell_activated(1, 3);
        controller.observer_mut().take();
        for _ in 0..3 {
            assert!(!controller.on_tick());
        }
        controller.on_cell_activated(3, 3);

        let expected_outcome = GameOutcome {
            is_victory: true,
            elapsed_seconds: 0,
            moves_count: 1,
            remaining_pieces: 1,
        };
        let expected_update = BestTimeUpdate::Improved {
            previous: Some(100),
            best: 0,
        };
        assert_eq!(
            controller.observer_mut().take(),
            [
                Event::Board(1),
                Event::Selection(None),
                Event::Stats {
                    remaining: 1,
                    moves: 1,
                    elapsed: 0
                },
                Event::BestTime(Some(0)),
                Event::GameOver(expected_outcome, expected_update),
            ]
        );

        assert!(controller.on_cell_activated(3, 3).is_ignored());
        assert!(!controller.on_tick());
        assert_eq!(controller.observer().game_overs(), 0);
        assert_eq!(store.best_time(), Some(0));
    }

    #[test]
    fn test_loss_does_not_touch_store() {
        let board = Board::from_pegs([pos(1, 3), pos(2, 3), pos(5, 2)]).unwrap();
        let mut controller = GameController::with_game(
            Game::from_board(board),
            MemoryBestTimeStore::default(),
            Recorder::default(),
        );
        controller.on_cell_activated(1, 3);
        controller.on_cell_activated(3, 3);
        let last = controller.observer().events.last().cloned();
        assert_eq!(
            last,
            Some(Event::GameOver(
                GameOutcome {
                    is_victory: false,
                    elapsed_seconds: 0,
                    moves_count: 1,
                    remaining_pieces: 2,
                },
                BestTimeUpdate::NotRecorded
            ))
        );
        assert_eq!(controller.store().best_time(), None);
    }

    #[test]
    fn test_ticks_render_stats_while_active() {
        let mut controller =
            GameController::new(MemoryBestTimeStore::default(), Recorder::default());
        assert!(!controller.on_tick());
        controller.on_cell_activated(3, 1);
        controller.on_cell_activated(3, 3);
        controller.observer_mut().take();

        assert!(controller.on_tick());
        assert_eq!(
            controller.observer_mut().take(),
            [Event::Stats {
                remaining: 31,
                moves: 1,
                elapsed: 1
            }]
        );

        controller.on_reset_requested();
        controller.observer_mut().take();
        assert!(!controller.on_tick());
        assert_eq!(controller.game().session().elapsed_seconds(), 0);
        assert!(controller.observer().events.is_empty());
    }

    #[test]
    fn test_keys() {
        let mut controller =
            GameController::new(MemoryBestTimeStore::default(), Recorder::default());
        // Idle with no selection: keys are ignored.
        assert!(!controller.on_key(KeyCommand::Escape));
        assert!(!controller.on_key(KeyCommand::Reset));

        controller.on_cell_activated(5, 3);
        assert!(controller.on_key(KeyCommand::Escape));
        assert_eq!(controller.game().selected(), None);

        controller.on_cell_activated(5, 3);
        controller.on_cell_activated(3, 3);
        assert!(controller.game().session().is_active());
        assert!(!controller.on_key(KeyCommand::Escape));
        assert!(controller.on_key(KeyCommand::Reset));
        assert_eq!(controller.game(), &Game::new());
    }
}
