//! Game session: board, turn order, engine and score
//!
//! The session is the only owner of the board. The GUI (or a test) drives it
//! through three calls: [`Game::place_human`], [`Game::engine_take_turn`] and
//! [`Game::check_winner`]. Every successful placement is followed by a win
//! check; a win or a full board ends the round.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, Pos, Stone, WIN_LENGTH};
use crate::config::GameConfig;
use crate::engine::{BotEngine, MoveResult};
use crate::error::{ConfigError, GameError};
use crate::rules::{check_winner, find_five_positions};

/// Whose move it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Human,
    Engine,
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won {
        winner: Stone,
        line: [Pos; WIN_LENGTH],
    },
    Draw,
}

/// Rounds won by each side since the last full reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub human: u32,
    pub engine: u32,
}

/// One human-versus-engine session.
pub struct Game {
    board: Board,
    engine: BotEngine,
    human: Stone,
    turn: Turn,
    outcome: Option<Outcome>,
    score: Score,
    last_move: Option<Pos>,
    last_engine_result: Option<MoveResult>,
    engine_first: bool,
    rng: StdRng,
}

impl Game {
    /// New session from a config. The human plays Black, the engine White.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let board = Board::from_config(config)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::with_board(board, config.engine_first, rng))
    }

    /// Session around an existing board, with an explicit random source
    pub fn with_board(board: Board, engine_first: bool, rng: StdRng) -> Self {
        let human = Stone::Black;
        Self {
            board,
            engine: BotEngine::new(human.opponent()),
            human,
            turn: Self::opener(engine_first),
            outcome: None,
            score: Score::default(),
            last_move: None,
            last_engine_result: None,
            engine_first,
            rng,
        }
    }

    fn opener(engine_first: bool) -> Turn {
        if engine_first {
            Turn::Engine
        } else {
            Turn::Human
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Turn {
        self.turn
    }

    #[inline]
    pub fn human_color(&self) -> Stone {
        self.human
    }

    #[inline]
    pub fn engine_color(&self) -> Stone {
        self.engine.color()
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// What the engine decided on its most recent turn
    #[inline]
    pub fn last_engine_result(&self) -> Option<MoveResult> {
        self.last_engine_result
    }

    /// Validate and commit a human stone.
    ///
    /// A rejected move leaves the board and the turn unchanged.
    pub fn place_human(&mut self, pos: Pos) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::RoundOver);
        }
        if self.turn != Turn::Human {
            return Err(GameError::NotHumanTurn);
        }
        self.board.set(pos, self.human)?;
        log::debug!("human plays {}", pos);
        self.after_placement(pos, Turn::Engine);
        Ok(())
    }

    /// Let the engine choose and commit its move.
    ///
    /// Returns the committed cell, or `None` if it is not the engine's turn,
    /// the round is over, or no rule found an empty cell. In the last case
    /// the turn stays with the engine and the next call draws fresh random
    /// choices; on a full board the round is drawn instead.
    pub fn engine_take_turn(&mut self) -> Option<Pos> {
        if self.is_over() || self.turn != Turn::Engine {
            return None;
        }

        let result = self.engine.get_move_with_stats(&self.board, &mut self.rng);
        self.last_engine_result = Some(result);

        let Some(pos) = result.best_move else {
            if self.board.is_full() {
                self.finish(Outcome::Draw);
            }
            return None;
        };

        if let Err(err) = self.board.set(pos, self.engine.color()) {
            // The engine only names cells that read Empty
            log::error!("engine chose an unplayable cell {}: {}", pos, err);
            return None;
        }
        self.after_placement(pos, Turn::Human);
        Some(pos)
    }

    /// Winner on the current board, Black checked first
    pub fn check_winner(&self) -> Option<Stone> {
        check_winner(&self.board)
    }

    fn after_placement(&mut self, pos: Pos, next: Turn) {
        self.last_move = Some(pos);

        if let Some(winner) = self.check_winner() {
            if let Some(line) = find_five_positions(&self.board, winner) {
                self.finish(Outcome::Won { winner, line });
                return;
            }
        }
        if self.board.is_full() {
            self.finish(Outcome::Draw);
            return;
        }
        self.turn = next;
    }

    fn finish(&mut self, outcome: Outcome) {
        if let Outcome::Won { winner, .. } = outcome {
            if winner == self.human {
                self.score.human += 1;
            } else {
                self.score.engine += 1;
            }
            let stones = self.board.stone_count(Stone::Black) + self.board.stone_count(Stone::White);
            log::info!(
                "{} wins after {} stones; score human {} - engine {}",
                winner.name(),
                stones,
                self.score.human,
                self.score.engine
            );
        } else {
            log::info!("round drawn");
        }
        self.outcome = Some(outcome);
    }

    /// Clear the board for another round, keeping the score
    pub fn new_round(&mut self) {
        self.board.reset();
        self.turn = Self::opener(self.engine_first);
        self.outcome = None;
        self.last_move = None;
        self.last_engine_result = None;
    }

    /// Clear the board and the score
    pub fn reset(&mut self) {
        self.new_round();
        self.score = Score::default();
        log::info!("game reset");
    }
}
