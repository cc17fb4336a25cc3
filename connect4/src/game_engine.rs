use log::{debug, info};
use serde::Serialize;

use crate::{has_win, winning_line, Action, Board, Cell, GameOutcome, Line, MoveError, PlayerId};

/// One game of Connect Four.
///
/// Starts with an empty board and `Player1` to move. Every accepted move places a piece for
/// the active player, then either ends the game or hands the turn over. Once the outcome is
/// terminal the state is frozen and every further move is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    board: Board,
    active_player: PlayerId,
    outcome: GameOutcome,
}

/// Starts a fresh game. Resetting is just dropping the old engine and calling this again.
pub fn new_game() -> GameEngine {
    GameEngine::new()
}

impl GameEngine {
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            active_player: PlayerId::Player1,
            outcome: GameOutcome::InProgress,
        }
    }

    /// Drops the active player's piece into `column` (0-based).
    pub fn play_move(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        if self.outcome.is_terminal() {
            debug!("Rejected column {}: game already over", column);
            return Err(MoveError::GameOver(self.outcome));
        }

        let row = self.board.find_drop_row(column).ok_or_else(|| {
            debug!("Rejected column {}: full or out of range", column);
            MoveError::InvalidMove { column }
        })?;

        let player = self.active_player;
        self.board.place(row, column, player);
        debug!("{} dropped into column {} at row {}", player, column, row);

        if has_win(&self.board, player) {
            self.outcome = GameOutcome::Win(player);
            info!("{} won after {} moves", player, self.move_number());
        } else if self.board.is_full() {
            self.outcome = GameOutcome::Tie;
            info!("Game tied with a full board");
        } else {
            self.active_player = player.other();
        }

        Ok(self.outcome)
    }

    /// The player whose turn it is. After a win this stays on the winner.
    pub fn current_player(&self) -> PlayerId {
        self.active_player
    }

    /// Contents of one cell, or `None` for coordinates off the board.
    pub fn cell_at(&self, row: usize, column: usize) -> Option<Cell> {
        let row = isize::try_from(row).ok()?;
        let column = isize::try_from(column).ok()?;

        self.board.get(row, column)
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Columns still open for a move. Empty once the game is over.
    pub fn valid_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.board.valid_columns()
    }

    /// Number of pieces placed so far.
    pub fn move_number(&self) -> usize {
        self.board.piece_count()
    }

    /// The four cells that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome
            .winner()
            .and_then(|player| winning_line(&self.board, player))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl engine::GameState for GameEngine {
    fn initial() -> Self {
        GameEngine::new()
    }
}

impl engine::GameEngine for GameEngine {
    type Action = Action;
    type Outcome = GameOutcome;
    type Error = MoveError;

    fn take_action(&mut self, action: &Self::Action) -> Result<Self::Outcome, Self::Error> {
        self.play_move(action.column())
    }

    fn terminal_state(&self) -> Option<Self::Outcome> {
        Some(self.outcome).filter(|outcome| outcome.is_terminal())
    }

    fn player_to_move(&self) -> usize {
        self.active_player.number()
    }

    fn move_number(&self) -> usize {
        GameEngine::move_number(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HEIGHT, WIDTH};
    use engine::{GameEngine as GameEngineTrait, GameState as GameStateTrait};

    fn play_all(game: &mut GameEngine, columns: &[usize]) -> GameOutcome {
        let mut outcome = game.outcome();
        for &column in columns {
            outcome = game.play_move(column).unwrap();
        }
        outcome
    }

    #[test]
    fn test_new_game_is_correct() {
        let game = new_game();
        assert_eq!(game.current_player(), PlayerId::Player1);
        assert_eq!(game.outcome(), GameOutcome::InProgress);
        assert_eq!(game.move_number(), 0);
        assert_eq!(game.valid_columns(), (0..WIDTH).collect::<Vec<_>>());
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_play_move_places_piece_at_bottom() {
        let mut game = new_game();
        assert_eq!(game.play_move(3), Ok(GameOutcome::InProgress));
        assert_eq!(game.cell_at(HEIGHT - 1, 3), Some(Cell::Occupied(PlayerId::Player1)));
    }

    #[test]
    fn test_play_move_switches_player() {
        let mut game = new_game();
        game.play_move(0).unwrap();
        assert_eq!(game.current_player(), PlayerId::Player2);
        game.play_move(0).unwrap();
        assert_eq!(game.current_player(), PlayerId::Player1);
        assert_eq!(game.cell_at(4, 0), Some(Cell::Occupied(PlayerId::Player2)));
    }

    #[test]
    fn test_play_move_full_column_is_rejected() {
        let mut game = new_game();
        play_all(&mut game, &[3, 3, 3, 3, 3, 3]);

        let before = game.clone();
        assert_eq!(game.play_move(3), Err(MoveError::InvalidMove { column: 3 }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_move_out_of_range_is_rejected() {
        let mut game = new_game();
        assert_eq!(
            game.play_move(WIDTH),
            Err(MoveError::InvalidMove { column: WIDTH })
        );
        assert_eq!(game, new_game());
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = new_game();
        play_all(&mut game, &[0, 0, 0, 0, 0, 0]);
        assert!(game.play_move(0).is_err());
        assert_eq!(game.current_player(), PlayerId::Player1);
    }

    #[test]
    fn test_win_keeps_winner_as_current_player() {
        let mut game = new_game();
        let outcome = play_all(&mut game, &[0, 1, 0, 1, 0, 1, 0]);

        assert_eq!(outcome, GameOutcome::Win(PlayerId::Player1));
        assert_eq!(game.current_player(), PlayerId::Player1);
        assert!(game.is_terminal());
        assert!(game.valid_columns().is_empty());
        assert_eq!(game.winning_line(), Some([(2, 0), (3, 0), (4, 0), (5, 0)]));
    }

    #[test]
    fn test_player_two_can_win() {
        let mut game = new_game();
        let outcome = play_all(&mut game, &[0, 1, 2, 1, 2, 1, 4, 1]);
        assert_eq!(outcome, GameOutcome::Win(PlayerId::Player2));
    }

    #[test]
    fn test_move_after_win_is_rejected() {
        let mut game = new_game();
        play_all(&mut game, &[0, 1, 0, 1, 0, 1, 0]);

        let before = game.clone();
        for column in 0..WIDTH {
            assert_eq!(
                game.play_move(column),
                Err(MoveError::GameOver(GameOutcome::Win(PlayerId::Player1)))
            );
        }
        assert_eq!(game, before);
    }

    #[test]
    fn test_winning_line_none_while_in_progress() {
        let mut game = new_game();
        game.play_move(0).unwrap();
        assert_eq!(game.winning_line(), None);
    }

    #[test]
    fn test_trait_take_action() {
        let mut game = <GameEngine as GameStateTrait>::initial();
        assert_eq!(GameEngineTrait::player_to_move(&game), 1);
        assert_eq!(GameEngineTrait::terminal_state(&game), None);

        let outcome = game.take_action(&Action::DropPiece(2)).unwrap();
        assert_eq!(outcome, GameOutcome::InProgress);
        assert_eq!(GameEngineTrait::player_to_move(&game), 2);
        assert_eq!(GameEngineTrait::move_number(&game), 1);
    }

    #[test]
    fn test_trait_terminal_state() {
        let mut game = new_game();
        for column in [0, 1, 0, 1, 0, 1, 0] {
            game.take_action(&Action::DropPiece(column)).unwrap();
        }
        assert_eq!(
            GameEngineTrait::terminal_state(&game),
            Some(GameOutcome::Win(PlayerId::Player1))
        );
    }

    #[test]
    fn test_cell_at_off_the_board_is_none() {
        let mut game = new_game();
        game.play_move(0).unwrap();

        assert_eq!(game.cell_at(HEIGHT - 1, 0), Some(Cell::Occupied(PlayerId::Player1)));
        assert_eq!(game.cell_at(0, 0), Some(Cell::Empty));
        assert_eq!(game.cell_at(HEIGHT, 0), None);
        assert_eq!(game.cell_at(0, WIDTH), None);
        assert_eq!(game.cell_at(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn test_serializes_to_json() {
        let mut game = new_game();
        game.play_move(0).unwrap();

        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["active_player"], "Player2");
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["board"]["cells"][HEIGHT - 1][0]["Occupied"], "Player1");
        assert_eq!(json["board"]["cells"][0][0], "Empty");
    }
}
