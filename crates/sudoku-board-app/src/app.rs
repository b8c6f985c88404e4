//! Sudoku board desktop UI.
//!
//! # Design Notes
//! - A 9x9 grid of clickable cells with clear 3x3 box boundaries.
//! - Clicking a cell selects it; typing a digit 1-9 fills it.
//! - All board state lives in [`Board`]; this layer only translates
//!   gestures and key presses into `select`/`enter_digit` calls and
//!   renders the result.
//!
//! There is deliberately no way to clear a filled cell: `0`, delete, and
//! backspace are rejected by the core and no erase control is offered.

use std::sync::Arc;

use eframe::{
    App, CreationContext, Frame,
    egui::{
        Button, CentralPanel, Context, Event, Grid, InputState, RichText, Stroke, StrokeKind, Ui,
        Vec2,
    },
};
use egui_extras::{Size, StripBuilder};
use sudoku_board_core::{Board, DigitInput, Position};

/// The eframe application: the board core plus grid rendering.
#[derive(Debug, Default)]
pub struct BoardApp {
    board: Board,
}

impl BoardApp {
    /// Creates the application with an empty board.
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Forwards every key press to the board as a digit candidate.
    ///
    /// The key's name is the translated candidate text; the board decides
    /// whether it resolves to a digit 1-9. Non-digit keys are rejected there
    /// without disturbing the selection.
    fn handle_input(&mut self, i: &InputState) {
        for event in &i.events {
            if let Event::Key {
                key, pressed: true, ..
            } = event
            {
                let input = DigitInput::new(key.name());
                log::debug!("key {key:?} translated to candidate {:?}", input.text());
                self.board.enter_digit(&input);
            }
        }
    }

    fn draw_grid(&mut self, ui: &mut Ui, cell_size: f32) {
        let style = Arc::clone(ui.style());
        let visuals = &style.visuals;
        let border_color = visuals.widgets.inactive.fg_stroke.color;
        let text_color = visuals.text_color();
        let selected_bg_color = visuals.selection.bg_fill;
        let bg_color = visuals.text_edit_bg_color();

        let thin_border = Stroke::new(1.0, border_color);
        let thick_border = Stroke::new(3.0, border_color);
        let selected_border = Stroke::new(6.0, border_color);

        Grid::new(ui.id().with("outer_board"))
            .spacing((0.0, 0.0))
            .min_col_width(cell_size * 3.0)
            .min_row_height(cell_size * 3.0)
            .show(ui, |ui| {
                for box_row in 0..3 {
                    for box_col in 0..3 {
                        let box_index = box_row * 3 + box_col;
                        let grid =
                            Grid::new(ui.id().with(format!("inner_box_{box_row}_{box_col}")))
                                .spacing((0.0, 0.0))
                                .min_col_width(cell_size)
                                .min_row_height(cell_size)
                                .show(ui, |ui| {
                                    for cell_row in 0..3 {
                                        for cell_col in 0..3 {
                                            let cell_index = cell_row * 3 + cell_col;
                                            let pos = Position::from_box(box_index, cell_index);
                                            let text = match self.board.digit_at(pos) {
                                                Some(digit) => RichText::new(digit.as_str())
                                                    .color(text_color),
                                                None => RichText::new(""),
                                            }
                                            .size(cell_size * 0.8);

                                            let selected =
                                                self.board.selection() == Some(pos);
                                            let fill = if selected {
                                                selected_bg_color
                                            } else {
                                                bg_color
                                            };
                                            let button = ui.add(
                                                Button::new(text)
                                                    .min_size(Vec2::splat(cell_size))
                                                    .fill(fill),
                                            );
                                            let border = if selected {
                                                selected_border
                                            } else {
                                                thin_border
                                            };
                                            ui.painter().rect_stroke(
                                                button.rect,
                                                0.0,
                                                border,
                                                StrokeKind::Inside,
                                            );
                                            if button.clicked() {
                                                log::debug!("cell {pos} selected");
                                                self.board.select(pos);
                                            }
                                        }
                                        ui.end_row();
                                    }
                                });
                        ui.painter().rect_stroke(
                            grid.response.rect,
                            0.0,
                            thick_border,
                            StrokeKind::Inside,
                        );
                    }
                    ui.end_row();
                }
            });
    }
}

impl App for BoardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        ctx.input(|i| self.handle_input(i));

        CentralPanel::default().show(ctx, |ui| {
            let board_size = ui.available_size().min_elem();
            let cell_size = board_size / 9.0;
            StripBuilder::new(ui)
                .size(Size::remainder())
                .size(Size::exact(board_size))
                .size(Size::remainder())
                .horizontal(|mut strip| {
                    strip.empty();
                    strip.cell(|ui| {
                        self.draw_grid(ui, cell_size);
                    });
                    strip.empty();
                });
        });
    }
}
