use std::str::FromStr;

use pegboard_game::KeyCommand;

/// One line of user input, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Action {
    /// Click on the cell at `(row, col)`.
    Activate { row: usize, col: usize },
    /// A shortcut key (`esc`, or `ctrl-r`).
    Key(KeyCommand),
    /// Unconditional restart (the restart button).
    Reset,
    /// Answer to the play-again prompt.
    PlayAgain(bool),
    /// List legal jumps.
    Hint,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseActionError {
    #[display("empty command")]
    Empty,
    #[display("unknown command {command:?}; type `help` for a list")]
    Unknown { command: String },
    #[display("expected a row and a column, e.g. `3 1`")]
    BadCoordinates,
}

pub const HELP: &str = "\
Commands:
  <row> <col>   activate a cell (select a peg, then an empty cell to jump)
  esc           clear the selection
  ctrl-r        restart (only while playing or with a selection)
  reset         restart
  hint          list legal jumps
  y / n         answer the play-again prompt
  help          show this help
  quit          exit";

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_ascii_lowercase();
        let action = match line.as_str() {
            "" => return Err(ParseActionError::Empty),
            "esc" | "escape" => Self::Key(KeyCommand::Escape),
            "ctrl-r" | "^r" => Self::Key(KeyCommand::Reset),
            "reset" | "restart" => Self::Reset,
            "y" | "yes" => Self::PlayAgain(true),
            "n" | "no" => Self::PlayAgain(false),
            "hint" => Self::Hint,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other if other.starts_with(|c: char| c.is_ascii_digit()) => parse_coordinates(other)?,
            other => {
                return Err(ParseActionError::Unknown {
                    command: other.to_owned(),
                });
            }
        };
        Ok(action)
    }
}

fn parse_coordinates(s: &str) -> Result<Action, ParseActionError> {
    let mut parts = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::parse::<usize>);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col)), None) => Ok(Action::Activate { row, col }),
        _ => Err(ParseActionError::BadCoordinates),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_coordinates() {
        assert_eq!("3 1".parse(), Ok(Action::Activate { row: 3, col: 1 }));
        assert_eq!(" 0,4 ".parse(), Ok(Action::Activate { row: 0, col: 4 }));
        assert_eq!("3, 3".parse(), Ok(Action::Activate { row: 3, col: 3 }));
        assert_eq!(
            "3".parse::<Action>(),
            Err(ParseActionError::BadCoordinates)
        );
        assert_eq!(
            "3 1 2".parse::<Action>(),
            Err(ParseActionError::BadCoordinates)
        );
        assert_eq!(
            "3 x".parse::<Action>(),
            Err(ParseActionError::BadCoordinates)
        );
    }

    #[test]
    fn test_parses_commands() {
        assert_eq!("ESC".parse(), Ok(Action::Key(KeyCommand::Escape)));
        assert_eq!("ctrl-r".parse(), Ok(Action::Key(KeyCommand::Reset)));
        assert_eq!("reset".parse(), Ok(Action::Reset));
        assert_eq!("Yes".parse(), Ok(Action::PlayAgain(true)));
        assert_eq!("n".parse(), Ok(Action::PlayAgain(false)));
        assert_eq!("q".parse(), Ok(Action::Quit));
        assert_eq!("   ".parse::<Action>(), Err(ParseActionError::Empty));
        assert_eq!(
            "jump".parse::<Action>(),
            Err(ParseActionError::Unknown {
                command: "jump".to_owned()
            })
        );
    }
}
