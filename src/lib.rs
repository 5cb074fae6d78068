//! Omok: five-in-a-row against a heuristic bot
//!
//! Two players take turns placing stones on a large grid; the first to line up
//! five in a row (horizontally, vertically or diagonally) wins. One side is
//! played by a rule-based bot.
//!
//! # Architecture
//!
//! - [`board`]: padded grid, directions and the offset projector
//! - [`rules`]: run detection and the win check
//! - [`engine`]: the bot's priority-ordered move rules
//! - [`game`]: session with turn order, rounds and score
//! - [`config`]: board size, pacing and seed, loadable from TOML
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use omok::{Game, GameConfig, Pos, Turn};
//!
//! let config = GameConfig { engine_first: false, seed: Some(3), ..Default::default() };
//! let mut game = Game::new(&config).unwrap();
//!
//! game.place_human(Pos::new(12, 12)).unwrap();
//! assert_eq!(game.turn(), Turn::Engine);
//!
//! if let Some(pos) = game.engine_take_turn() {
//!     println!("bot plays {}", pos);
//! }
//! assert_eq!(game.check_winner(), None);
//! ```
//!
//! # Bot Priority
//!
//! 1. Opening book (first three replies)
//! 2. Block an opponent four, then an open three
//! 3. Extend own four, three, two
//! 4. Random cell near an own stone

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{project, Board, CellState, Direction, Pos, Stone, WIN_LENGTH};
pub use config::GameConfig;
pub use engine::{BotEngine, MoveResult, Rule};
pub use error::{BoardError, ConfigError, GameError};
pub use game::{Game, Outcome, Score, Turn};
pub use rules::{check_winner, find_runs, Run};
