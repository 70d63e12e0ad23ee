//! Line-oriented rendering of the game to any [`Write`] sink.

use std::io::{self, Write};

use pegboard_core::{Board, INITIAL_PEGS, Position};
use pegboard_game::{BestTimeUpdate, ClockTime, GameObserver, GameOutcome, Session};

use self::{grid::GridViewModel, status_line::StatusLineViewModel};

mod grid;
mod status_line;

pub const PLAY_AGAIN_PROMPT: &str = "Play again? [y/n]";

/// A [`GameObserver`] that buffers render calls and writes them out on
/// [`present`](Self::present).
///
/// Render calls only update the cached view; nothing reaches the sink until the
/// front-end finishes handling one input line.
#[derive(Debug)]
pub struct TextRenderer<W> {
    out: W,
    board: Board,
    selected: Option<Position>,
    session: Session,
    best_time: Option<u32>,
    board_dirty: bool,
    status_dirty: bool,
    messages: Vec<String>,
}

impl<W> TextRenderer<W>
where
    W: Write,
{
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            board: Board::new(),
            selected: None,
            session: Session::new(INITIAL_PEGS),
            best_time: None,
            board_dirty: true,
            status_dirty: true,
            messages: vec![],
        }
    }

    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Queues a line to print after the board on the next [`present`](Self::present).
    pub fn message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Forces the board and status line to be redrawn.
    pub fn invalidate(&mut self) {
        self.board_dirty = true;
        self.status_dirty = true;
    }

    /// Writes whatever changed since the last call, followed by queued messages.
    pub fn present(&mut self) -> io::Result<()> {
        if self.board_dirty {
            writeln!(self.out)?;
            grid::show(
                &mut self.out,
                &GridViewModel::new(&self.board, self.selected),
            )?;
        }
        if self.board_dirty || self.status_dirty {
            status_line::show(
                &mut self.out,
                &StatusLineViewModel::new(&self.session, self.best_time),
            )?;
        }
        for message in self.messages.drain(..) {
            writeln!(self.out, "{message}")?;
        }
        self.board_dirty = false;
        self.status_dirty = false;
        self.out.flush()
    }

    /// Writes the input prompt without a trailing newline.
    pub fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        write!(self.out, "{prompt}")?;
        self.out.flush()
    }
}

impl<W> GameObserver for TextRenderer<W>
where
    W: Write,
{
    fn render_board(&mut self, board: &Board) {
        self.board.clone_from(board);
        self.board_dirty = true;
    }

    fn render_selection(&mut self, selected: Option<Position>) {
        if self.selected != selected {
            self.selected = selected;
            self.board_dirty = true;
        }
    }

    fn render_stats(&mut self, session: &Session) {
        self.session.clone_from(session);
        self.status_dirty = true;
    }

    fn render_best_time(&mut self, best_time: Option<u32>) {
        self.best_time = best_time;
        self.status_dirty = true;
    }

    fn notify_game_over(&mut self, outcome: &GameOutcome, best_time: BestTimeUpdate) {
        let time = ClockTime(outcome.elapsed_seconds);
        if outcome.is_victory {
            self.message(format!(
                "Congratulations, you won! Time: {time}  Moves: {}",
                outcome.moves_count
            ));
            if let BestTimeUpdate::Improved { previous, best } = best_time {
                self.message(format!(
                    "New best time: {} (was {})",
                    ClockTime(best),
                    ClockTime::or_placeholder(previous)
                ));
            }
        } else {
            self.message(format!(
                "Game over, no moves left. Pegs remaining: {}  Time: {time}  Moves: {}",
                outcome.remaining_pieces, outcome.moves_count
            ));
        }
        self.message(PLAY_AGAIN_PROMPT);
    }
}

#[cfg(test)]
mod tests {
    use pegboard_game::{GameController, MemoryBestTimeStore};

    use super::*;

    fn output(renderer: &TextRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.get_ref().clone()).unwrap()
    }

    #[test]
    fn test_present_writes_board_once() {
        let mut renderer = TextRenderer::new(Vec::new());
        let _ = GameController::new(MemoryBestTimeStore::new(Some(61)), &mut renderer);

        renderer.present().unwrap();
        let first = output(&renderer);
        assert!(first.contains("3  o o o . o o o"));
        assert!(first.contains("Pegs: 32  Moves: 0  Time: 00:00  Best: 01:01"));

        renderer.present().unwrap();
        assert_eq!(output(&renderer), first);
    }

    #[test]
    fn test_tick_redraws_status_only() {
        let mut renderer = TextRenderer::new(Vec::new());
        let mut controller = GameController::new(MemoryBestTimeStore::default(), &mut renderer);
        controller.on_cell_activated(3, 1);
        controller.on_cell_activated(3, 3);
        controller.observer_mut().present().unwrap();
        let before = output(controller.observer()).len();

        assert!(controller.on_tick());
        controller.observer_mut().present().unwrap();
        let text = output(controller.observer());
        assert_eq!(
            &text[before..],
            "Pegs: 31  Moves: 1  Time: 00:01  Best: --\n"
        );
    }

    #[test]
    fn test_game_over_messages() {
        let mut renderer = TextRenderer::new(Vec::new());
        let win = GameOutcome {
            is_victory: true,
            elapsed_seconds: 90,
            moves_count: 31,
            remaining_pieces: 1,
        };
        renderer.notify_game_over(
            &win,
            BestTimeUpdate::Improved {
                previous: None,
                best: 90,
            },
        );
        let loss = GameOutcome {
            is_victory: false,
            elapsed_seconds: 5,
            moves_count: 2,
            remaining_pieces: 30,
        };
        renderer.notify_game_over(&loss, BestTimeUpdate::NotRecorded);
        renderer.board_dirty = false;
        renderer.status_dirty = false;
        renderer.present().unwrap();

        let text = output(&renderer);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Congratulations, you won! Time: 01:30  Moves: 31",
                "New best time: 01:30 (was --)",
                PLAY_AGAIN_PROMPT,
                "Game over, no moves left. Pegs remaining: 30  Time: 00:05  Moves: 2",
                PLAY_AGAIN_PROMPT,
            ]
        );
    }
}
