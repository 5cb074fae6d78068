//! GUI module for the Omok game
//!
//! Native egui/eframe front end over [`crate::Game`].

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::OmokApp;
pub use game_state::{GameState, Screen};
