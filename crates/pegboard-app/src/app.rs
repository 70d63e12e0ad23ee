use std::{
    fmt::Write as _,
    io::{self, Write},
    ops::ControlFlow,
    time::{Duration, Instant},
};

use pegboard_game::{ActivationOutcome, BestTimeStore, Game, GameController, KeyCommand};

use crate::{
    action::{Action, HELP, ParseActionError},
    ui::TextRenderer,
};

const PROMPT: &str = "> ";

/// The interactive terminal front-end.
///
/// Input is handled one line at a time. The clock is driven by wall time: before
/// each line is handled, one tick is delivered for every whole tick period that
/// passed while the game was active.
#[derive(Debug)]
pub struct PegboardApp<S, W> {
    controller: GameController<S, TextRenderer<W>>,
    tick_period: Duration,
    clock_anchor: Option<Instant>,
    awaiting_play_again: bool,
}

impl<S, W> PegboardApp<S, W>
where
    S: BestTimeStore,
    W: Write,
{
    #[must_use]
    pub fn new(store: S, out: W, tick_period: Duration) -> Self {
        Self::with_game(Game::new(), store, out, tick_period)
    }

    #[must_use]
    pub fn with_game(game: Game, store: S, out: W, tick_period: Duration) -> Self {
        assert!(!tick_period.is_zero(), "tick period must be positive");
        Self {
            controller: GameController::with_game(game, store, TextRenderer::new(out)),
            tick_period,
            clock_anchor: None,
            awaiting_play_again: false,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        self.controller.game()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        self.controller.store()
    }

    #[must_use]
    pub fn renderer(&self) -> &TextRenderer<W> {
        self.controller.observer()
    }

    #[must_use]
    pub fn is_awaiting_play_again(&self) -> bool {
        self.awaiting_play_again
    }

    /// Draws the initial screen and the first prompt.
    pub fn start(&mut self) -> io::Result<()> {
        let renderer = self.controller.observer_mut();
        renderer.message("Type `help` for a list of commands.");
        renderer.present()?;
        renderer.prompt(PROMPT)
    }

    pub fn handle_line(&mut self, line: &str) -> io::Result<ControlFlow<()>> {
        self.handle_line_at(line, Instant::now())
    }

    /// Handles one input line as if it arrived at `now`.
    pub fn handle_line_at(&mut self, line: &str, now: Instant) -> io::Result<ControlFlow<()>> {
        self.catch_up(now);

        let flow = match line.parse::<Action>() {
            Ok(action) => self.dispatch(action),
            Err(ParseActionError::Empty) => {
                self.controller.observer_mut().invalidate();
                ControlFlow::Continue(())
            }
            Err(err) => {
                self.controller.observer_mut().message(err.to_string());
                ControlFlow::Continue(())
            }
        };

        self.sync_clock(now);
        let renderer = self.controller.observer_mut();
        renderer.present()?;
        if flow.is_continue() {
            renderer.prompt(PROMPT)?;
        }
        Ok(flow)
    }

    fn dispatch(&mut self, action: Action) -> ControlFlow<()> {
        log::trace!("dispatching {action:?}");
        match action {
            Action::Activate { row, col } => self.activate(row, col),
            Action::Key(key) => {
                if self.controller.on_key(key) {
                    if key == KeyCommand::Reset {
                        self.awaiting_play_again = false;
                    }
                } else {
                    log::debug!("{key:?} ignored: game not running and nothing selected");
                }
            }
            Action::Reset => self.reset(),
            Action::PlayAgain(answer) => self.answer_play_again(answer),
            Action::Hint => self.hint(),
            Action::Help => self.controller.observer_mut().message(HELP),
            Action::Quit => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    fn activate(&mut self, row: usize, col: usize) {
        match self.controller.on_cell_activated(row, col) {
            ActivationOutcome::Rejected(err) => {
                self.controller
                    .observer_mut()
                    .message(format!("Illegal move: {err}"));
            }
            ActivationOutcome::Moved {
                game_over: Some(_), ..
            } => {
                self.awaiting_play_again = true;
            }
            ActivationOutcome::Ignored if self.awaiting_play_again => {
                self.controller
                    .observer_mut()
                    .message("The game is over. Play again? [y/n]");
            }
            _ => {}
        }
    }

    fn reset(&mut self) {
        self.controller.on_reset_requested();
        self.awaiting_play_again = false;
    }

    fn answer_play_again(&mut self, answer: bool) {
        if !self.awaiting_play_again {
            self.controller
                .observer_mut()
                .message("There is no question to answer.");
            return;
        }
        if answer {
            self.reset();
        } else {
            self.awaiting_play_again = false;
            self.controller
                .observer_mut()
                .message("Type `reset` to start a new game or `quit` to exit.");
        }
    }

    fn hint(&mut self) {
        let game = self.controller.game();
        let message = if game.session().phase().is_ended() {
            "The game is over.".to_owned()
        } else {
            let mut message = String::from("Legal jumps:");
            for jump in game.board().legal_jumps() {
                let _ = write!(message, " {}->{}", jump.source(), jump.destination());
            }
            message
        };
        self.controller.observer_mut().message(message);
    }

    fn catch_up(&mut self, now: Instant) {
        let Some(mut anchor) = self.clock_anchor else {
            return;
        };
        while now.saturating_duration_since(anchor) >= self.tick_period {
            if !self.controller.on_tick() {
                break;
            }
            anchor += self.tick_period;
        }
        self.clock_anchor = Some(anchor);
    }

    fn sync_clock(&mut self, now: Instant) {
        if self.controller.game().session().is_active() {
            if self.clock_anchor.is_none() {
                self.clock_anchor = Some(now);
            }
        } else {
            self.clock_anchor = None;
        }
    }
}
