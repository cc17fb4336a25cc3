use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::PlayerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Win(PlayerId),
    Tie,
}

impl GameOutcome {
    /// `Win` and `Tie` end the game.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl Display for GameOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Win(player) => write!(f, "{} won", player),
            GameOutcome::Tie => write!(f, "tie"),
        }
    }
}
