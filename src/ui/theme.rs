//! Colours and sizes for the Omok window

use egui::Color32;

// Table and grid
pub const TABLE_BG: Color32 = Color32::from_rgb(237, 145, 33); // carrot orange
pub const GRID_LINE: Color32 = Color32::BLACK;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const LABEL: Color32 = Color32::from_rgb(90, 45, 10);

// Stones
pub const BLACK_STONE: Color32 = Color32::BLACK;
pub const WHITE_STONE: Color32 = Color32::WHITE;
pub const STONE_OUTLINE: Color32 = Color32::from_rgb(40, 40, 40);
pub const STONE_RADIUS_RATIO: f32 = 0.42;

pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(220, 20, 60);
pub const LAST_MOVE_MARKER_RADIUS: f32 = 3.5;
pub const WIN_LINE: Color32 = Color32::from_rgb(0, 0, 156);
pub const WIN_LINE_WIDTH: f32 = 4.0;

/// Translucent stone under the pointer
pub fn ghost_stone() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 70)
}

// Screens
pub const INSTRUCTIONS_BG: Color32 = Color32::from_rgb(0, 0, 156); // duke blue
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(161, 202, 241); // baby blue eyes
pub const GAME_OVER_TEXT: Color32 = INSTRUCTIONS_BG;
pub const INSTRUCTIONS_TEXT: Color32 = Color32::WHITE;
pub const STATUS_TEXT: Color32 = Color32::RED;

pub const BOARD_MARGIN: f32 = 28.0;
