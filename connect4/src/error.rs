use crate::GameOutcome;

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full or does not exist")]
    InvalidMove { column: usize },

    #[error("the game is over ({0})")]
    GameOver(GameOutcome),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    #[test]
    fn test_invalid_move_display() {
        let err = MoveError::InvalidMove { column: 9 };
        assert_eq!(err.to_string(), "column 9 is full or does not exist");
    }

    #[test]
    fn test_game_over_display() {
        let err = MoveError::GameOver(GameOutcome::Win(PlayerId::Player1));
        assert_eq!(err.to_string(), "the game is over (Player 1 won)");
    }
}
