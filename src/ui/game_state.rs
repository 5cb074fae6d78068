//! Screen flow and bot pacing for the GUI

use std::time::{Duration, Instant};

use crate::{ConfigError, Game, GameConfig, Pos, Turn};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Rules text, click to start
    Instructions,
    Playing,
    /// Result banner over the final board, click to continue
    GameOver,
}

/// Game session plus everything the window needs around it
pub struct GameState {
    pub game: Game,
    pub screen: Screen,
    pub message: Option<String>,
    bot_delay: Duration,
    /// When the engine's current turn began
    bot_wait_start: Option<Instant>,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            game: Game::new(config)?,
            screen: Screen::Instructions,
            message: None,
            bot_delay: Duration::from_millis(config.bot_delay_ms),
            bot_wait_start: None,
        })
    }

    /// Wrap an existing session, skipping the instructions screen
    pub fn with_game(game: Game, bot_delay: Duration) -> Self {
        let mut state = Self {
            game,
            screen: Screen::Playing,
            message: None,
            bot_delay,
            bot_wait_start: None,
        };
        state.sync_screen();
        state
    }

    /// Leave the instructions screen
    pub fn start(&mut self) {
        if self.screen == Screen::Instructions {
            self.screen = Screen::Playing;
        }
    }

    /// Handle a click on a board cell
    pub fn click_cell(&mut self, pos: Pos) {
        if self.screen != Screen::Playing {
            return;
        }
        match self.game.place_human(pos) {
            Ok(()) => {
                self.message = None;
                self.sync_screen();
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Whether the bot is waiting out its thinking delay
    pub fn is_bot_thinking(&self) -> bool {
        self.screen == Screen::Playing && self.game.turn() == Turn::Engine && !self.game.is_over()
    }

    /// Advance the bot. Returns how long until it should try again, if it is
    /// still thinking.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if !self.is_bot_thinking() {
            self.bot_wait_start = None;
            return None;
        }

        let started = *self.bot_wait_start.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);
        if elapsed < self.bot_delay {
            return Some(self.bot_delay - elapsed);
        }

        self.bot_wait_start = None;
        self.game.engine_take_turn();
        self.sync_screen();

        // No move found: think again for another delay
        if self.is_bot_thinking() {
            self.bot_wait_start = Some(now);
            return Some(self.bot_delay);
        }
        None
    }

    /// Start the next round after the result screen, keeping the score
    pub fn continue_after_round(&mut self) {
        if self.screen == Screen::GameOver {
            self.game.new_round();
            self.message = None;
            self.bot_wait_start = None;
            self.screen = Screen::Playing;
        }
    }

    /// Clear board and score (Enter)
    pub fn reset(&mut self) {
        self.game.reset();
        self.message = None;
        self.bot_wait_start = None;
        self.screen = Screen::Playing;
    }

    fn sync_screen(&mut self) {
        if self.game.is_over() {
            self.screen = Screen::GameOver;
        }
    }
}
