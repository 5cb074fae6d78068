//! The eight scan directions and the offset projector
//!
//! East adds one column and North adds one row. Directions are numbered in
//! scan order E, NE, N, SE, W, SW, S, NW, which puts `d` and `d.opposite()`
//! four indices apart. The run detector reports runs in this order and the
//! cluster and fallback rules never try index 7 (`NorthWest`).

use super::Pos;

/// One of the eight unit steps through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    NorthEast,
    North,
    SouthEast,
    West,
    SouthWest,
    South,
    NorthWest,
}

/// `(dr, dc)` per direction, indexed by [`Direction::index`]
const DELTAS: [(i32, i32); 8] = [
    (0, 1),   // East
    (1, 1),   // NorthEast
    (1, 0),   // North
    (-1, 1),  // SouthEast
    (0, -1),  // West
    (-1, -1), // SouthWest
    (-1, 0),  // South
    (1, -1),  // NorthWest
];

impl Direction {
    /// All directions in index order
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::SouthEast,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::NorthWest,
    ];

    /// Directions 0..=6. The cluster and fallback rules never try `NorthWest`.
    pub const FIRST_SEVEN: [Direction; 7] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::SouthEast,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Option<Direction> {
        Self::ALL.get(idx).copied()
    }

    /// Unit step `(dr, dc)`
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        DELTAS[self.index()]
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 4) % 8]
    }
}

/// Cell reached from `anchor` after `distance` steps along `direction`.
///
/// Negative distances step backwards. The result may lie outside the board.
#[inline]
pub fn project(anchor: Pos, direction: Direction, distance: i32) -> Pos {
    anchor.offset(direction.delta(), distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_indices_round_trip() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
            assert_eq!(Direction::from_index(i), Some(*dir));
        }
        assert_eq!(Direction::from_index(8), None);
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        let mut seen = Vec::new();
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
            assert_ne!((dr, dc), (0, 0));
            assert!(!seen.contains(&(dr, dc)), "duplicate delta for {:?}", dir);
            seen.push((dr, dc));
        }
    }

    #[test]
    fn test_opposite_negates_delta() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dr, -dc));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_first_seven_skips_north_west() {
        assert_eq!(Direction::FIRST_SEVEN.len(), 7);
        assert!(!Direction::FIRST_SEVEN.contains(&Direction::NorthWest));
        assert_eq!(&Direction::ALL[..7], &Direction::FIRST_SEVEN[..]);
    }

    #[test]
    fn test_project_examples() {
        let anchor = Pos::new(10, 10);
        assert_eq!(project(anchor, Direction::East, 3), Pos::new(10, 13));
        assert_eq!(project(anchor, Direction::East, -1), Pos::new(10, 9));
        assert_eq!(project(anchor, Direction::NorthEast, 2), Pos::new(12, 12));
        assert_eq!(project(anchor, Direction::SouthWest, 2), Pos::new(8, 8));
        assert_eq!(project(anchor, Direction::SouthEast, 1), Pos::new(9, 11));
        assert_eq!(project(anchor, Direction::North, 0), anchor);
    }

    #[test]
    fn test_index_deltas() {
        let expected = [(0, 1), (1, 1), (1, 0), (-1, 1), (0, -1), (-1, -1), (-1, 0), (1, -1)];
        let anchor = Pos::new(10, 10);
        for (i, (dr, dc)) in expected.into_iter().enumerate() {
            let dir = Direction::from_index(i).unwrap();
            assert_eq!(project(anchor, dir, 1), Pos::new(10 + dr, 10 + dc), "index {i}");
        }
        assert_eq!(project(anchor, Direction::from_index(3).unwrap(), 1), Pos::new(9, 11));
        assert_eq!(project(anchor, Direction::from_index(7).unwrap(), 1), Pos::new(11, 9));
    }

    #[test]
    fn test_project_may_leave_board() {
        assert_eq!(project(Pos::new(0, 0), Direction::South, 2), Pos::new(-2, 0));
    }

    proptest! {
        #[test]
        fn prop_project_inverse(
            row in -50i32..50,
            col in -50i32..50,
            idx in 0usize..8,
            k in -10i32..10,
        ) {
            let anchor = Pos::new(row, col);
            let dir = Direction::from_index(idx).unwrap();
            prop_assert_eq!(project(project(anchor, dir, k), dir, -k), anchor);
        }

        #[test]
        fn prop_opposite_equals_negative_distance(
            row in -50i32..50,
            col in -50i32..50,
            idx in 0usize..8,
            k in -10i32..10,
        ) {
            let anchor = Pos::new(row, col);
            let dir = Direction::from_index(idx).unwrap();
            prop_assert_eq!(project(anchor, dir.opposite(), k), project(anchor, dir, -k));
        }
    }
}
