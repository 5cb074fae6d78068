//! Bot engine: a fixed-priority list of move rules
//!
//! Every engine turn the rules are tried in this order, and the first one
//! that names an empty interior cell decides the move:
//!
//! 1. **Opening**: opponent has no stones, play the centre
//! 2. **Second move**: opponent has one stone, play 1 or 2 steps from it in a
//!    random direction (a single attempt)
//! 3. **Cluster**: opponent has two stones, play next to our first stone
//! 4. **Defend four**: block an opponent four
//! 5. **Defend three**: block an opponent three that is open at both ends
//! 6. **Win four**: extend our own four
//! 7. **Extend three**: extend our own three
//! 8. **Extend two**: extend our own two
//! 9. **Fallback**: a random cell 1 or 2 steps from one of our stones
//!
//! The candidate distances are measured from a run's anchor along the run's
//! direction (`-1` is the cell just behind the anchor). They are kept exactly
//! as tuned, which means some candidates fall on the run's own stones and only
//! the `-1` cell is ever playable for them; the mirrored orientation of the
//! same line supplies the other end.
//!
//! # Example
//!
//! ```
//! use omok::{Board, BotEngine, Pos, Stone};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let engine = BotEngine::new(Stone::White);
//! let board = Board::new(25, 25);
//!
//! assert_eq!(engine.get_move(&board, &mut rng), Some(Pos::new(12, 12)));
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{project, Board, Direction, Pos, Stone};
use crate::rules::{find_runs, Run};

/// Rule that produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Opening,
    SecondMove,
    Cluster,
    DefendFour,
    DefendThree,
    WinFour,
    ExtendThree,
    ExtendTwo,
    Fallback,
}

impl Rule {
    /// Short label for the side panel
    pub fn label(self) -> &'static str {
        match self {
            Rule::Opening => "opening",
            Rule::SecondMove => "second move",
            Rule::Cluster => "cluster",
            Rule::DefendFour => "defend four",
            Rule::DefendThree => "defend open three",
            Rule::WinFour => "win four",
            Rule::ExtendThree => "extend three",
            Rule::ExtendTwo => "extend two",
            Rule::Fallback => "fallback",
        }
    }
}

/// Outcome of one decision cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Cell to play, if any rule found one
    pub best_move: Option<Pos>,
    /// Rule that chose `best_move`
    pub rule: Option<Rule>,
}

impl MoveResult {
    #[inline]
    fn played(pos: Pos, rule: Rule) -> Self {
        Self {
            best_move: Some(pos),
            rule: Some(rule),
        }
    }

    #[inline]
    fn no_move() -> Self {
        Self {
            best_move: None,
            rule: None,
        }
    }
}

/// Heuristic move chooser for one side.
///
/// The engine never mutates the board. Callers commit the returned cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotEngine {
    color: Stone,
}

impl BotEngine {
    #[must_use]
    pub fn new(color: Stone) -> Self {
        Self { color }
    }

    #[inline]
    pub fn color(&self) -> Stone {
        self.color
    }

    /// Cell to play, or `None` when no rule finds an empty cell.
    #[must_use]
    pub fn get_move<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Pos> {
        self.get_move_with_stats(board, rng).best_move
    }

    /// Run the rule list and report which rule decided.
    pub fn get_move_with_stats<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> MoveResult {
        let opponent = self.color.opponent();
        let opponent_stones = board.cells_of(opponent);

        let opening = match opponent_stones.as_slice() {
            [] => self.opening(board).map(|p| (p, Rule::Opening)),
            [only] => self.second_move(board, *only, rng).map(|p| (p, Rule::SecondMove)),
            [_, _] => self.cluster(board).map(|p| (p, Rule::Cluster)),
            _ => None,
        };
        if let Some((pos, rule)) = opening {
            return Self::commit(pos, rule);
        }

        // Defence first
        let fours = find_runs(board, 4, opponent);
        if let Some(pos) = first_open(board, &fours, &[3, -1]) {
            return Self::commit(pos, Rule::DefendFour);
        }

        let threes = find_runs(board, 3, opponent);
        if let Some(pos) = open_three_block(board, &threes) {
            return Self::commit(pos, Rule::DefendThree);
        }

        // Then offence
        let own_fours = find_runs(board, 4, self.color);
        if let Some(pos) = first_open(board, &own_fours, &[2, -1]) {
            return Self::commit(pos, Rule::WinFour);
        }

        let own_threes = find_runs(board, 3, self.color);
        if let Some(pos) = first_open(board, &own_threes, &[2, -1]) {
            return Self::commit(pos, Rule::ExtendThree);
        }

        let own_twos = find_runs(board, 2, self.color);
        if let Some(pos) = first_open(board, &own_twos, &[2]) {
            return Self::commit(pos, Rule::ExtendTwo);
        }

        if let Some(pos) = self.fallback(board, rng) {
            return Self::commit(pos, Rule::Fallback);
        }

        log::warn!("{} engine found no empty cell to play", self.color.name());
        MoveResult::no_move()
    }

    fn commit(pos: Pos, rule: Rule) -> MoveResult {
        log::debug!("{} rule plays {}", rule.label(), pos);
        MoveResult::played(pos, rule)
    }

    /// Centre of the board
    fn opening(&self, board: &Board) -> Option<Pos> {
        Some(board.center()).filter(|&p| board.is_empty(p))
    }

    /// One random cell 1 or 2 steps from the opponent's only stone
    fn second_move<R: Rng + ?Sized>(&self, board: &Board, stone: Pos, rng: &mut R) -> Option<Pos> {
        let direction = Direction::from_index(rng.gen_range(0..Direction::ALL.len()))?;
        let distance = rng.gen_range(1..=2);
        let target = project(stone, direction, distance);
        if board.is_empty(target) {
            Some(target)
        } else {
            log::debug!("second-move target {} is not playable", target);
            None
        }
    }

    /// First free neighbour of our first stone, `NorthWest` excluded
    fn cluster(&self, board: &Board) -> Option<Pos> {
        let first = *board.cells_of(self.color).first()?;
        Direction::FIRST_SEVEN
            .iter()
            .map(|&d| project(first, d, 1))
            .find(|&p| board.is_empty(p))
    }

    /// Random cell near a random own stone, `NorthWest` excluded
    fn fallback<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Pos> {
        let mut own = board.cells_of(self.color);
        own.shuffle(rng);

        for stone in own {
            let mut directions = Direction::FIRST_SEVEN;
            directions.shuffle(rng);
            for direction in directions {
                let target = project(stone, direction, rng.gen_range(1..=2));
                if board.is_empty(target) {
                    return Some(target);
                }
            }
        }
        None
    }
}

/// For each run in order, the first empty cell among `distances`
fn first_open(board: &Board, runs: &[Run], distances: &[i32]) -> Option<Pos> {
    runs.iter().find_map(|run| {
        distances
            .iter()
            .map(|&d| run.project(d))
            .find(|&p| board.is_empty(p))
    })
}

/// Far end of the first three whose far and near ends are both empty
fn open_three_block(board: &Board, runs: &[Run]) -> Option<Pos> {
    runs.iter().find_map(|run| {
        let far = run.project(3);
        let near = run.project(-1);
        (board.is_empty(far) && board.is_empty(near)).then_some(far)
    })
}
