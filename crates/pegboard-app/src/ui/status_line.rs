use std::io::{self, Write};

use pegboard_game::{ClockTime, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StatusLineViewModel {
    remaining_pieces: usize,
    moves_count: usize,
    elapsed_seconds: u32,
    best_time: Option<u32>,
}

impl StatusLineViewModel {
    #[must_use]
    pub(crate) fn new(session: &Session, best_time: Option<u32>) -> Self {
        Self {
            remaining_pieces: session.remaining_pieces(),
            moves_count: session.moves_count(),
            elapsed_seconds: session.elapsed_seconds(),
            best_time,
        }
    }
}

pub(crate) fn show<W>(out: &mut W, vm: &StatusLineViewModel) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(
        out,
        "Pegs: {}  Moves: {}  Time: {}  Best: {}",
        vm.remaining_pieces,
        vm.moves_count,
        ClockTime(vm.elapsed_seconds),
        ClockTime::or_placeholder(vm.best_time),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shows_placeholder_without_best_time() {
        let mut out = Vec::new();
        let vm = StatusLineViewModel::new(&Session::new(32), None);
        show(&mut out, &vm).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Pegs: 32  Moves: 0  Time: 00:00  Best: --\n"
        );
    }

    #[test]
    fn test_shows_best_time() {
        let mut out = Vec::new();
        let vm = StatusLineViewModel::new(&Session::new(5), Some(125));
        show(&mut out, &vm).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("Best: 02:05\n"));
    }
}
