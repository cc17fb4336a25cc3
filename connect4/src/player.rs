use std::fmt::{self, Display, Formatter};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// 1 for the first player, 2 for the second.
    pub fn number(self) -> usize {
        match self {
            PlayerId::Player1 => 1,
            PlayerId::Player2 => 2,
        }
    }

    /// Single character used when drawing the board.
    pub fn symbol(self) -> char {
        match self {
            PlayerId::Player1 => 'X',
            PlayerId::Player2 => 'O',
        }
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}
