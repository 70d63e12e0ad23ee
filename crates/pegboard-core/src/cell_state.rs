/// State of a single cell on the board.
///
/// The text notation used by [`Board`](crate::Board)'s `FromStr` and `Display`
/// implementations maps each variant to one character: `#` for
/// [`Invalid`](Self::Invalid), `o` for [`Occupied`](Self::Occupied) and `.` for
/// [`Empty`](Self::Empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellState {
    /// Outside the cross; never holds a peg.
    Invalid,
    /// A playable cell holding a peg.
    Occupied,
    /// A playable cell without a peg.
    Empty,
}

impl CellState {
    /// Returns `true` if the cell is part of the cross.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, Self::Invalid)
    }

    /// Returns the notation character for this state.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Invalid => '#',
            Self::Occupied => 'o',
            Self::Empty => '.',
        }
    }

    /// Parses a notation character.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Invalid),
            'o' => Some(Self::Occupied),
            '.' => Some(Self::Empty),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for state in [CellState::Invalid, CellState::Occupied, CellState::Empty] {
            assert_eq!(CellState::from_char(state.to_char()), Some(state));
        }
        assert_eq!(CellState::from_char('x'), None);
    }

    #[test]
    fn test_playable() {
        assert!(!CellState::Invalid.is_playable());
        assert!(CellState::Occupied.is_playable());
        assert!(CellState::Empty.is_playable());
        assert!(CellState::Occupied.is_occupied());
        assert!(CellState::Empty.is_empty());
    }
}
