//! Board rendering and mouse-to-cell mapping
//!
//! Row 0 is drawn at the bottom so that North (increasing row) points up.

use crate::{Board, CellState, Pos, WIN_LENGTH};
use egui::{Align2, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    rows: usize,
    cols: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
            rows: 0,
            cols: 0,
        }
    }
}

impl BoardView {
    /// Render the board and report what was clicked.
    ///
    /// Cells are reported only when `interactive` is set; a click on a
    /// non-interactive board comes back as [`BoardClick::Anywhere`].
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; WIN_LENGTH]>,
        interactive: bool,
    ) -> BoardClick {
        self.rows = board.rows();
        self.cols = board.cols();

        let available = ui.available_size();
        let span_x = (self.cols.max(2) - 1) as f32;
        let span_y = (self.rows.max(2) - 1) as f32;
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / span_x)
            .min((available.y - 2.0 * BOARD_MARGIN) / span_y)
            .max(4.0);

        let size = Vec2::new(
            span_x * self.cell_size + 2.0 * BOARD_MARGIN,
            span_y * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(2), TABLE_BG);
        self.draw_grid(&painter);
        self.draw_labels(&painter);
        for pos in board.interior() {
            self.draw_stone(&painter, pos, board.cell(pos));
        }
        if let Some(pos) = last_move {
            painter.circle_filled(self.board_to_screen(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !interactive {
            return if response.clicked() {
                BoardClick::Anywhere
            } else {
                BoardClick::None
            };
        }

        let Some(hovered) = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .filter(|&p| board.cell(p) == CellState::Empty)
        else {
            return BoardClick::None;
        };

        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(self.board_to_screen(hovered), radius, ghost_stone());

        if response.clicked() {
            BoardClick::Cell(hovered)
        } else {
            BoardClick::None
        }
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let last_row = self.rows.saturating_sub(1) as i32;
        let last_col = self.cols.saturating_sub(1) as i32;

        for col in 0..=last_col {
            let start = self.board_to_screen(Pos::new(0, col));
            let end = self.board_to_screen(Pos::new(last_row, col));
            painter.line_segment([start, end], stroke);
        }
        for row in 0..=last_row {
            let start = self.board_to_screen(Pos::new(row, 0));
            let end = self.board_to_screen(Pos::new(row, last_col));
            painter.line_segment([start, end], stroke);
        }
    }

    /// 1-based column numbers along the bottom, row numbers up the left side
    fn draw_labels(&self, painter: &Painter) {
        let font = egui::FontId::monospace(9.0);
        let bottom = self.board_rect.max.y - BOARD_MARGIN * 0.35;
        let left = self.board_rect.min.x + BOARD_MARGIN * 0.35;

        for col in 0..self.cols {
            let x = self.board_to_screen(Pos::new(0, col as i32)).x;
            painter.text(Pos2::new(x, bottom), Align2::CENTER_CENTER, col + 1, font.clone(), LABEL);
        }
        for row in 0..self.rows {
            let y = self.board_to_screen(Pos::new(row as i32, 0)).y;
            painter.text(Pos2::new(left, y), Align2::CENTER_CENTER, row + 1, font.clone(), LABEL);
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, cell: CellState) {
        let fill = match cell {
            CellState::Black => BLACK_STONE,
            CellState::White => WHITE_STONE,
            CellState::Empty | CellState::OutOfBounds => return,
        };
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle(center, radius, fill, Stroke::new(1.0, STONE_OUTLINE));
    }

    /// Line through the five winning stones, each one ringed
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; WIN_LENGTH]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_LINE);
        let first = self.board_to_screen(line[0]);
        let last = self.board_to_screen(line[WIN_LENGTH - 1]);
        painter.line_segment([first, last], stroke);

        let radius = self.cell_size * STONE_RADIUS_RATIO + 2.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    /// Convert screen coordinates to the nearest interior cell
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size;

        let col = x.floor() as i32;
        let flipped_row = y.floor() as i32;
        let row = self.rows as i32 - 1 - flipped_row;

        if col >= 0 && col < self.cols as i32 && flipped_row >= 0 && row >= 0 {
            Some(Pos::new(row, col))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let flipped_row = self.rows as f32 - 1.0 - pos.row as f32;
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + flipped_row * self.cell_size;
        Pos2::new(x, y)
    }
}

/// What a click on the board meant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardClick {
    None,
    /// Empty interior cell under the pointer
    Cell(Pos),
    /// Click on a non-interactive board
    Anywhere,
}
