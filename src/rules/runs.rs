//! Run detection: straight lines of same-colored stones
//!
//! A run is an anchor stone plus a direction. For a requested length `n` the
//! detector reports every `(anchor, direction)` whose `n` cells, starting at
//! the anchor and stepping along the direction, all hold the requested color.
//!
//! One physical line is reported once per end it can be read from: five stones
//! in a row show up as an `East` run anchored at the west end and a `West` run
//! anchored at the east end (plus the shorter sub-runs for smaller `n`). The
//! decision rules rely on this, because each orientation yields a different
//! pair of candidate cells.

use crate::board::{project, Board, CellState, Direction, Pos, Stone};

/// A monochrome line of known length, identified by its first cell and the
/// direction it extends in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub anchor: Pos,
    pub direction: Direction,
}

impl Run {
    #[inline]
    pub fn new(anchor: Pos, direction: Direction) -> Self {
        Self { anchor, direction }
    }

    /// Cell `distance` steps from the anchor along the run's direction
    #[inline]
    pub fn project(&self, distance: i32) -> Pos {
        project(self.anchor, self.direction, distance)
    }

    /// The `length` cells this run covers, anchor first
    pub fn cells(&self, length: usize) -> impl Iterator<Item = Pos> + '_ {
        (0..length as i32).map(move |k| self.project(k))
    }
}

/// Whether `length` cells from `anchor` along `direction` all hold `stone`
#[inline]
fn is_run(board: &Board, anchor: Pos, direction: Direction, length: usize, target: CellState) -> bool {
    (0..length.max(1) as i32).all(|k| board.cell(project(anchor, direction, k)) == target)
}

/// Every run of `length` cells of `stone`. Longer lines contribute each of
/// their sub-runs.
///
/// Anchors are visited in row-major order and directions in index order, and
/// results are returned in that order. Cells past the board edge read as
/// out-of-bounds and never match, so runs never leave the interior.
pub fn find_runs(board: &Board, length: usize, stone: Stone) -> Vec<Run> {
    let target = CellState::from(stone);
    let mut runs = Vec::new();

    for anchor in board.interior() {
        if board.cell(anchor) != target {
            continue;
        }
        for direction in Direction::ALL {
            if is_run(board, anchor, direction, length, target) {
                runs.push(Run::new(anchor, direction));
            }
        }
    }

    runs
}

/// Whether at least one run of `length` exists for `stone`
pub fn has_run(board: &Board, length: usize, stone: Stone) -> bool {
    let target = CellState::from(stone);
    board.interior().any(|anchor| {
        board.cell(anchor) == target
            && Direction::ALL
                .iter()
                .any(|&d| is_run(board, anchor, d, length, target))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board_with(stones: &[(i32, i32, Stone)]) -> Board {
        let mut board = Board::new(15, 15);
        for &(r, c, s) in stones {
            board.set(Pos::new(r, c), s).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_runs() {
        let board = Board::new(15, 15);
        for n in 1..=5 {
            assert!(find_runs(&board, n, Stone::Black).is_empty());
            assert!(find_runs(&board, n, Stone::White).is_empty());
        }
    }

    #[test]
    fn test_single_stone_is_a_run_of_one_in_every_direction() {
        let board = board_with(&[(7, 7, Stone::Black)]);
        let runs = find_runs(&board, 1, Stone::Black);
        assert_eq!(runs.len(), 8);
        assert!(runs.iter().all(|r| r.anchor == Pos::new(7, 7)));
        assert!(find_runs(&board, 2, Stone::Black).is_empty());
    }

    #[test]
    fn test_horizontal_two_reported_from_both_ends() {
        let board = board_with(&[(3, 3, Stone::White), (3, 4, Stone::White)]);
        let runs = find_runs(&board, 2, Stone::White);
        assert_eq!(
            runs,
            vec![
                Run::new(Pos::new(3, 3), Direction::East),
                Run::new(Pos::new(3, 4), Direction::West),
            ]
        );
    }

    #[test]
    fn test_emission_order_is_row_major_then_direction() {
        // Vertical three at column 5, rows 2..=4
        let board = board_with(&[
            (2, 5, Stone::Black),
            (3, 5, Stone::Black),
            (4, 5, Stone::Black),
        ]);
        let runs = find_runs(&board, 3, Stone::Black);
        assert_eq!(
            runs,
            vec![
                Run::new(Pos::new(2, 5), Direction::North),
                Run::new(Pos::new(4, 5), Direction::South),
            ]
        );
    }

    #[test]
    fn test_four_in_row_reports_sub_runs() {
        let board = board_with(&[
            (5, 2, Stone::Black),
            (5, 3, Stone::Black),
            (5, 4, Stone::Black),
            (5, 5, Stone::Black),
        ]);
        assert_eq!(find_runs(&board, 4, Stone::Black).len(), 2);
        // Two threes read eastward, two westward
        assert_eq!(find_runs(&board, 3, Stone::Black).len(), 4);
        assert_eq!(find_runs(&board, 2, Stone::Black).len(), 6);
        assert!(find_runs(&board, 5, Stone::Black).is_empty());
    }

    #[test]
    fn test_diagonals() {
        let board = board_with(&[
            (1, 1, Stone::White),
            (2, 2, Stone::White),
            (3, 3, Stone::White),
        ]);
        let runs = find_runs(&board, 3, Stone::White);
        assert_eq!(
            runs,
            vec![
                Run::new(Pos::new(1, 1), Direction::NorthEast),
                Run::new(Pos::new(3, 3), Direction::SouthWest),
            ]
        );

        let board = board_with(&[
            (1, 3, Stone::White),
            (2, 2, Stone::White),
            (3, 1, Stone::White),
        ]);
        let runs = find_runs(&board, 3, Stone::White);
        assert_eq!(
            runs,
            vec![
                Run::new(Pos::new(1, 3), Direction::NorthWest),
                Run::new(Pos::new(3, 1), Direction::SouthEast),
            ]
        );
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let board = board_with(&[
            (6, 0, Stone::Black),
            (6, 1, Stone::Black),
            (6, 2, Stone::White),
            (6, 3, Stone::Black),
        ]);
        assert!(find_runs(&board, 3, Stone::Black).is_empty());
    }

    #[test]
    fn test_runs_stop_at_edges() {
        // Stones against the high edge: the margin must not extend them
        let board = board_with(&[(14, 13, Stone::Black), (14, 14, Stone::Black)]);
        let runs = find_runs(&board, 2, Stone::Black);
        assert_eq!(runs.len(), 2);
        assert!(find_runs(&board, 3, Stone::Black).is_empty());

        // And against the low edge
        let board = board_with(&[(0, 0, Stone::White), (0, 1, Stone::White)]);
        assert!(find_runs(&board, 3, Stone::White).is_empty());
    }

    #[test]
    fn test_five_reported_forward_and_backward() {
        let stones: Vec<_> = (0..5).map(|i| (9, 3 + i, Stone::Black)).collect();
        let board = board_with(&stones);
        let runs = find_runs(&board, 5, Stone::Black);
        assert!(runs.contains(&Run::new(Pos::new(9, 3), Direction::East)));
        assert!(runs.contains(&Run::new(Pos::new(9, 7), Direction::West)));
        assert_eq!(runs.len(), 2);
        assert!(has_run(&board, 5, Stone::Black));
        assert!(!has_run(&board, 5, Stone::White));
    }

    #[test]
    fn test_run_cells() {
        let run = Run::new(Pos::new(4, 4), Direction::SouthEast);
        let cells: Vec<_> = run.cells(3).collect();
        assert_eq!(cells, vec![Pos::new(4, 4), Pos::new(3, 5), Pos::new(2, 6)]);
        assert_eq!(run.project(-1), Pos::new(5, 3));
    }

    fn arb_board() -> impl Strategy<Value = Board> {
        prop::collection::vec(0u8..3, 10 * 10).prop_map(|cells| {
            let mut board = Board::new(10, 10);
            for (i, v) in cells.into_iter().enumerate() {
                let pos = Pos::new((i / 10) as i32, (i % 10) as i32);
                match v {
                    1 => board.set(pos, Stone::Black).unwrap(),
                    2 => board.set(pos, Stone::White).unwrap(),
                    _ => {}
                }
            }
            board
        })
    }

    proptest! {
        #[test]
        fn prop_runs_are_monochrome_and_in_bounds(
            board in arb_board(),
            length in 1usize..=5,
            white in any::<bool>(),
        ) {
            let stone = if white { Stone::White } else { Stone::Black };
            for run in find_runs(&board, length, stone) {
                for pos in run.cells(length) {
                    prop_assert!(board.contains(pos));
                    prop_assert_eq!(board.cell(pos), CellState::from(stone));
                }
            }
        }

        #[test]
        fn prop_every_run_has_its_mirror(
            board in arb_board(),
            length in 2usize..=5,
        ) {
            let runs = find_runs(&board, length, Stone::Black);
            for run in &runs {
                let mirror = Run::new(run.project(length as i32 - 1), run.direction.opposite());
                prop_assert!(runs.contains(&mirror));
            }
        }

        #[test]
        fn prop_placed_line_of_five_is_found(
            row in 0i32..15,
            col in 0i32..15,
            idx in 0usize..8,
        ) {
            let dir = Direction::from_index(idx).unwrap();
            let mut board = Board::new(15, 15);
            let anchor = Pos::new(row, col);
            let line: Vec<_> = (0..5).map(|k| project(anchor, dir, k)).collect();
            prop_assume!(line.iter().all(|&p| board.contains(p)));
            for &p in &line {
                board.set(p, Stone::White).unwrap();
            }
            let runs = find_runs(&board, 5, Stone::White);
            prop_assert!(runs.contains(&Run::new(anchor, dir)));
            prop_assert!(runs.contains(&Run::new(line[4], dir.opposite())));
            prop_assert_eq!(runs.len(), 2);
        }

        #[test]
        fn prop_five_found_iff_line_exists(board in arb_board()) {
            let brute = board.interior().any(|anchor| {
                Direction::ALL.iter().any(|&d| {
                    (0..5).all(|k| {
                        let p = project(anchor, d, k);
                        board.contains(p) && board.cell(p) == CellState::Black
                    })
                })
            });
            prop_assert_eq!(!find_runs(&board, 5, Stone::Black).is_empty(), brute);
        }
    }
}
