//! Main application for the Omok GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, TopBottomPanel};

use super::board_view::{BoardClick, BoardView};
use super::game_state::{GameState, Screen};
use super::theme::*;
use crate::{Outcome, Turn};

const INSTRUCTIONS: [&str; 4] = [
    "Welcome to Omok!",
    "You win by connecting",
    "5 stones in any orientation.",
    "Press ENTER to reset game at any time.",
];

/// Main Omok application
pub struct OmokApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl OmokApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    fn render_instructions(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(INSTRUCTIONS_BG))
            .show(ctx, |ui| {
                let response = ui.interact(
                    ui.max_rect(),
                    ui.id().with("instructions"),
                    egui::Sense::click(),
                );

                ui.vertical_centered(|ui| {
                    ui.add_space(ui.available_height() * 0.3);
                    for line in INSTRUCTIONS {
                        ui.label(RichText::new(line).size(26.0).color(INSTRUCTIONS_TEXT));
                        ui.add_space(6.0);
                    }
                    ui.add_space(30.0);
                    ui.label(RichText::new("Click to Start").size(30.0).strong().color(INSTRUCTIONS_TEXT));
                });

                if response.clicked() {
                    self.state.start();
                }
            });
    }

    /// Score line and turn status
    fn render_score_bar(&self, ctx: &Context) {
        TopBottomPanel::top("score_bar")
            .frame(Frame::new().fill(TABLE_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                let score = self.state.game.score();
                let human_turn = self.state.game.turn() == Turn::Human && !self.state.game.is_over();

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("(You) BLACK: {}", score.human))
                                .size(18.0)
                                .strong()
                                .color(BLACK_STONE),
                        );
                        if human_turn {
                            ui.label(RichText::new("Your turn!").size(14.0).color(STATUS_TEXT));
                        }
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("(Bot) WHITE: {}", score.engine))
                                    .size(18.0)
                                    .strong()
                                    .color(WHITE_STONE),
                            );
                            if self.state.is_bot_thinking() {
                                ui.label(RichText::new("Thinking...").size(14.0).color(STATUS_TEXT));
                            }
                        });
                    });
                });

                if self.show_debug {
                    self.render_debug_line(ui);
                }
                if let Some(msg) = &self.state.message {
                    ui.label(RichText::new(msg).size(12.0).color(STATUS_TEXT));
                }
            });
    }

    /// Which rule produced the bot's last move (D)
    fn render_debug_line(&self, ui: &mut egui::Ui) {
        let text = match self.state.game.last_engine_result() {
            Some(result) => match (result.rule, result.best_move) {
                (Some(rule), Some(pos)) => format!("bot: {} at {}", rule.label(), pos),
                _ => "bot: no move".to_string(),
            },
            None => "bot: waiting".to_string(),
        };
        ui.label(RichText::new(text).size(11.0).monospace().color(LABEL));
    }

    fn render_game_over_banner(&mut self, ctx: &Context) {
        let text = match self.state.game.outcome() {
            Some(Outcome::Won { winner, .. }) if winner == self.state.game.human_color() => {
                "You Won! Click to continue."
            }
            Some(Outcome::Won { .. }) => "Bot Won. Click to continue.",
            Some(Outcome::Draw) | None => "Draw. Click to continue.",
        };

        TopBottomPanel::bottom("game_over")
            .frame(Frame::new().fill(GAME_OVER_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    Frame::new()
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(6.0)
                        .show(ui, |ui| {
                            let label = egui::Label::new(
                                RichText::new(text).size(24.0).strong().color(GAME_OVER_TEXT),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(label).clicked() {
                                self.state.continue_after_round();
                            }
                        });
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(TABLE_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                let game = &self.state.game;
                let winning_line = match game.outcome() {
                    Some(Outcome::Won { line, .. }) => Some(line),
                    _ => None,
                };
                let interactive = self.state.screen == Screen::Playing
                    && game.turn() == Turn::Human
                    && !game.is_over();

                let click = ui
                    .vertical_centered(|ui| {
                        self.board_view.show(
                            ui,
                            game.board(),
                            game.last_move(),
                            winning_line,
                            interactive,
                        )
                    })
                    .inner;

                match click {
                    BoardClick::Cell(pos) => self.state.click_cell(pos),
                    BoardClick::Anywhere => self.state.continue_after_round(),
                    BoardClick::None => {}
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (reset, toggle_debug) =
            ctx.input(|i| (i.key_pressed(egui::Key::Enter), i.key_pressed(egui::Key::D)));

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if reset && self.state.screen != Screen::Instructions {
            self.state.reset();
        }
    }
}

impl eframe::App for OmokApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Let the bot move once its delay has passed
        let wait = self.state.tick(Instant::now());

        match self.state.screen {
            Screen::Instructions => self.render_instructions(ctx),
            Screen::Playing => {
                self.render_score_bar(ctx);
                self.render_board(ctx);
            }
            Screen::GameOver => {
                self.render_score_bar(ctx);
                self.render_game_over_banner(ctx);
                self.render_board(ctx);
            }
        }

        if let Some(wait) = wait {
            ctx.request_repaint_after(wait);
        }
    }
}
