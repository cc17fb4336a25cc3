use std::fmt::{self, Display, Formatter};

use crate::{Board, Cell, GameEngine, WIDTH};

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, " "),
            Cell::Occupied(player) => write!(f, "{}", player.symbol()),
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let border = format!("+{}", "---+".repeat(WIDTH));

        writeln!(f, "{}", border)?;

        for row in self.rows() {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {} |", cell)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", border)?;

        for column in 1..=WIDTH {
            write!(f, "  {} ", column)?;
        }
        writeln!(f)
    }
}

impl Display for GameEngine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board())
    }
}

#[cfg(test)]
mod tests {
    use crate::{new_game, PlayerId, HEIGHT};

    #[test]
    fn test_empty_board_display() {
        let rendered = new_game().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), HEIGHT + 3);
        assert_eq!(lines[0], "+---+---+---+---+---+---+---+");
        assert_eq!(lines[1], "|   |   |   |   |   |   |   |");
        assert_eq!(lines[HEIGHT + 2], "  1   2   3   4   5   6   7 ");
    }

    #[test]
    fn test_pieces_display_bottom_up() {
        let mut game = new_game();
        game.play_move(0).unwrap();
        game.play_move(0).unwrap();
        game.play_move(6).unwrap();

        let rendered = game.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[HEIGHT], "| X |   |   |   |   |   | X |");
        assert_eq!(lines[HEIGHT - 1], "| O |   |   |   |   |   |   |");
        assert_eq!(game.current_player(), PlayerId::Player2);
    }
}
