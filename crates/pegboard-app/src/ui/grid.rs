use std::io::{self, Write};

use pegboard_core::{BOARD_SIZE, Board, CellState, Position};

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel<'a> {
    board: &'a Board,
    selected: Option<Position>,
}

impl<'a> GridViewModel<'a> {
    #[must_use]
    pub(crate) fn new(board: &'a Board, selected: Option<Position>) -> Self {
        Self { board, selected }
    }
}

fn cell_char(state: CellState, selected: bool) -> char {
    match state {
        CellState::Invalid => ' ',
        CellState::Occupied if selected => '*',
        CellState::Occupied => 'o',
        CellState::Empty => '.',
    }
}

/// Writes the board with column headers and row labels.
pub(crate) fn show<W>(out: &mut W, vm: &GridViewModel) -> io::Result<()>
where
    W: Write + ?Sized,
{
    let mut header = String::from("  ");
    for col in 0..BOARD_SIZE {
        header.push_str(&format!(" {col}"));
    }
    writeln!(out, "{header}")?;

    for row in 0..BOARD_SIZE {
        let mut line = format!("{row} ");
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            line.push(' ');
            line.push(cell_char(vm.board.cell(pos), vm.selected == Some(pos)));
        }
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(board: &Board, selected: Option<Position>) -> String {
        let mut out = Vec::new();
        show(&mut out, &GridViewModel::new(board, selected)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_renders_initial_board() {
        let expected = [
            "   0 1 2 3 4 5 6",
            "0      o o o",
            "1      o o o",
            "2  o o o o o o o",
            "3  o o o . o o o",
            "4  o o o o o o o",
            "5      o o o",
            "6      o o o",
        ];
        let text = render(&Board::new(), None);
        assert_eq!(text.lines().collect::<Vec<_>>(), expected);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_marks_selected_peg() {
        let text = render(&Board::new(), Some(Position::new(3, 1)));
        let row3 = text.lines().nth(4).unwrap();
        assert_eq!(row3, "3  o * o . o o o");
    }
}
