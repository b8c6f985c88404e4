//! Sudoku board desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop application.

use eframe::egui::{self, Vec2};

use crate::app::BoardApp;

mod app;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.sudoku-board.sudoku-board";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size(Vec2::new(800.0, 600.0))
            .with_min_inner_size(Vec2::new(400.0, 300.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Sudoku",
        options,
        Box::new(|cc| Ok(Box::new(BoardApp::new(cc)))),
    )
}
