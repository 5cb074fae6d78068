//! Win condition: five or more stones in a row
//!
//! Overlines count. Black is checked before White, so a corrupted board with
//! both colors holding five reports Black.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

use super::runs::{find_runs, has_run};

/// Check if there's 5+ in a row for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    has_run(board, WIN_LENGTH, stone)
}

/// Cells of the first winning line found for `stone`, in scan order
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<[Pos; WIN_LENGTH]> {
    let run = find_runs(board, WIN_LENGTH, stone).into_iter().next()?;
    let mut line = [run.anchor; WIN_LENGTH];
    for (slot, pos) in line.iter_mut().zip(run.cells(WIN_LENGTH)) {
        *slot = pos;
    }
    Some(line)
}

/// Check for a winner
///
/// Returns `Some(Stone)` if there's a winner, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| has_five_in_row(board, stone))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_line(board: &mut Board, cells: impl IntoIterator<Item = (i32, i32)>, stone: Stone) {
        for (r, c) in cells {
            board.set(Pos::new(r, c), stone).unwrap();
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new(19, 19);
        place_line(&mut board, (0..5).map(|i| (9, i)), Stone::Black);
        assert!(has_five_in_row(&board, Stone::Black));
        assert!(!has_five_in_row(&board, Stone::White));
        assert_eq!(check_winner(&board), Some(Stone::Black));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new(19, 19);
        place_line(&mut board, (0..5).map(|i| (i, 9)), Stone::White);
        assert_eq!(check_winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let mut board = Board::new(19, 19);
        place_line(&mut board, (0..5).map(|i| (i, i)), Stone::White);
        assert!(has_five_in_row(&board, Stone::White));
    }

    #[test]
    fn test_anti_diagonal_five() {
        let mut board = Board::new(19, 19);
        place_line(&mut board, (0..5).map(|i| (4 + i, 8 - i)), Stone::White);
        assert_eq!(check_winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let mut board = Board::new(19, 19);
        place_line(&mut board, (0..6).map(|i| (9, i)), Stone::Black);
        assert!(has_five_in_row(&board, Stone::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new(19, 19);
        place_line(&mut board, (0..4).map(|i| (9, i)), Stone::Black);
        assert!(!has_five_in_row(&board, Stone::Black));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_broken_line_not_win() {
        let mut board = Board::new(19, 19);
        place_line(&mut board, [(9, 0), (9, 1), (9, 3), (9, 4), (9, 5)], Stone::Black);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_five_at_corner() {
        let mut board = Board::new(19, 19);
        place_line(&mut board, (0..5).map(|i| (14 + i, 14 + i)), Stone::White);
        assert_eq!(check_winner(&board), Some(Stone::White));
    }

    #[test]
    fn test_no_winner() {
        let board = Board::new(19, 19);
        assert_eq!(check_winner(&board), None);
        assert!(find_five_positions(&board, Stone::Black).is_none());
    }

    #[test]
    fn test_black_reported_first() {
        let mut board = Board::new(19, 19);
        place_line(&mut board, (0..5).map(|i| (15, i)), Stone::White);
        place_line(&mut board, (0..5).map(|i| (2, i)), Stone::Black);
        assert_eq!(check_winner(&board), Some(Stone::Black));
    }

    #[test]
    fn test_find_five_positions() {
        let mut board = Board::new(19, 19);
        place_line(&mut board, (0..5).map(|i| (3 + i, 10)), Stone::Black);
        let line = find_five_positions(&board, Stone::Black).unwrap();
        assert_eq!(
            line,
            [
                Pos::new(3, 10),
                Pos::new(4, 10),
                Pos::new(5, 10),
                Pos::new(6, 10),
                Pos::new(7, 10),
            ]
        );
    }
}
