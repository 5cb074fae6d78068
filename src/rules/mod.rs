//! Board analysis for Omok
//!
//! - Run detection (monochrome lines of a given length)
//! - Win conditions (5-in-a-row)

pub mod runs;
pub mod win;

// Re-exports for convenient access
pub use runs::{find_runs, has_run, Run};
pub use win::{check_winner, find_five_positions, has_five_in_row};
