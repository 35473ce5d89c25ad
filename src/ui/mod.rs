pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll_mnemonic();

        if matches!(self.state, AppState::Quiz) {
            top_panel(self, ctx);
        }

        bottom_panel(ctx);

        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
        }

        // Keep painting while the remote mnemonic is in flight so the card
        // can swap in without a click.
        if self.awaiting_mnemonic() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
