use crate::{Board, Cell, PlayerId, CONNECT, HEIGHT, WIDTH};

/// The four line shapes a connection can take, each anchored at its first cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (row, column) step between consecutive cells of a line.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

pub type Line = [(usize, usize); CONNECT];

/// True if `player` owns four connected cells anywhere on the board.
pub fn has_win(board: &Board, player: PlayerId) -> bool {
    winning_line(board, player).is_some()
}

/// First line owned entirely by `player`, scanning anchors row by row and trying each
/// direction in `Direction::ALL` order.
pub fn winning_line(board: &Board, player: PlayerId) -> Option<Line> {
    let target = Cell::Occupied(player);

    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            for direction in Direction::ALL {
                if let Some(line) = line_from(board, row, column, direction, target) {
                    return Some(line);
                }
            }
        }
    }

    None
}

fn line_from(
    board: &Board,
    row: usize,
    column: usize,
    direction: Direction,
    target: Cell,
) -> Option<Line> {
    let (d_row, d_column) = direction.step();
    let mut line = [(0, 0); CONNECT];

    for (i, coord) in line.iter_mut().enumerate() {
        let r = row as isize + d_row * i as isize;
        let c = column as isize + d_column * i as isize;

        if board.get(r, c)? != target {
            return None;
        }

        *coord = (r as usize, c as usize);
    }

    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId::{Player1 as P1, Player2 as P2};

    fn board_with(pieces: &[(usize, usize, PlayerId)]) -> Board {
        let mut board = Board::new();
        for &(row, column, player) in pieces {
            board.place(row, column, player);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let board = Board::new();
        assert!(!has_win(&board, P1));
        assert!(!has_win(&board, P2));
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(&[(5, 2, P1), (5, 3, P1), (5, 4, P1), (5, 5, P1)]);
        assert!(has_win(&board, P1));
        assert!(!has_win(&board, P2));
        assert_eq!(
            winning_line(&board, P1),
            Some([(5, 2), (5, 3), (5, 4), (5, 5)])
        );
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let board = board_with(&[(0, 3, P2), (0, 4, P2), (0, 5, P2), (0, 6, P2)]);
        assert!(has_win(&board, P2));
        assert!(!has_win(&board, P1));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_with(&[(5, 0, P2), (4, 0, P2), (3, 0, P2), (2, 0, P2)]);
        assert!(has_win(&board, P2));
        assert!(!has_win(&board, P1));
        assert_eq!(
            winning_line(&board, P2),
            Some([(2, 0), (3, 0), (4, 0), (5, 0)])
        );
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = board_with(&[(2, 1, P1), (3, 2, P1), (4, 3, P1), (5, 4, P1)]);
        assert!(has_win(&board, P1));
        assert!(!has_win(&board, P2));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let board = board_with(&[(2, 6, P2), (3, 5, P2), (4, 4, P2), (5, 3, P2)]);
        assert!(has_win(&board, P2));
        assert!(!has_win(&board, P1));
        assert_eq!(
            winning_line(&board, P2),
            Some([(2, 6), (3, 5), (4, 4), (5, 3)])
        );
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = board_with(&[(5, 0, P1), (5, 1, P1), (5, 2, P1)]);
        assert!(!has_win(&board, P1));
    }

    #[test]
    fn test_interrupted_line_is_not_a_win() {
        let board = board_with(&[(5, 0, P1), (5, 1, P1), (5, 2, P2), (5, 3, P1), (5, 4, P1)]);
        assert!(!has_win(&board, P1));
        assert!(!has_win(&board, P2));
    }

    #[test]
    fn test_line_does_not_wrap_across_rows() {
        let board = board_with(&[(4, 5, P1), (4, 6, P1), (5, 0, P1), (5, 1, P1)]);
        assert!(!has_win(&board, P1));
    }

    #[test]
    fn test_mixed_players_is_not_a_win() {
        let board = board_with(&[(5, 0, P1), (4, 0, P2), (3, 0, P1), (2, 0, P2)]);
        assert!(!has_win(&board, P1));
        assert!(!has_win(&board, P2));
    }

    #[test]
    fn test_five_in_a_row_is_a_win() {
        let board = board_with(&[(5, 0, P1), (5, 1, P1), (5, 2, P1), (5, 3, P1), (5, 4, P1)]);
        assert_eq!(
            winning_line(&board, P1),
            Some([(5, 0), (5, 1), (5, 2), (5, 3)])
        );
    }
}
