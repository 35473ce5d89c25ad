use crate::QuizApp;
use crate::ui::layout::centered_panel;
use crate::view_models::QuizView;
use egui::{Button, Color32, Context, Grid, RichText, Ui};

const BLUE: Color32 = Color32::from_rgb(37, 99, 235);
const RED: Color32 = Color32::from_rgb(220, 38, 38);
const GREEN: Color32 = Color32::from_rgb(22, 163, 74);
const GRAY: Color32 = Color32::from_rgb(156, 163, 175);
const PURPLE: Color32 = Color32::from_rgb(126, 34, 206);

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let view = app.quiz_view();

    centered_panel(ctx, 520.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            score_row(ui, &view);
            ui.add_space(16.0);
            equation_row(ui, &view);
            ui.add_space(20.0);

            if view.revealed {
                reveal_card(app, ui, &view);
            } else {
                option_grid(app, ui, &view);
            }
        });
    });
}

fn score_row(ui: &mut Ui, view: &QuizView) {
    Grid::new("score_grid").spacing([24.0, 4.0]).show(ui, |ui| {
        for score in &view.score {
            ui.label(RichText::new(score.caption).small().color(GRAY));
        }
        ui.end_row();
        for score in &view.score {
            ui.label(RichText::new(score.value.to_string()).size(26.0).strong());
        }
        ui.end_row();
    });
}

fn equation_row(ui: &mut Ui, view: &QuizView) {
    ui.horizontal_wrapped(|ui| {
        let center = (ui.available_width() - 320.0).max(0.0) / 2.0;
        ui.add_space(center);
        ui.label(RichText::new(view.factor_a.to_string()).size(56.0).color(BLUE).strong());
        ui.label(RichText::new("×").size(48.0).color(GRAY));
        ui.label(RichText::new(view.factor_b.to_string()).size(56.0).color(RED).strong());
        ui.label(RichText::new("=").size(48.0).color(GRAY));
        let answer_color = if view.revealed { GREEN } else { GRAY };
        ui.label(
            RichText::new(view.answer_text())
                .size(56.0)
                .color(answer_color)
                .strong(),
        );
    });
}

/// 2×2 grid of answer buttons; the last wrong pick stays disabled and
/// flagged until the next question.
fn option_grid(app: &mut QuizApp, ui: &mut Ui, view: &QuizView) {
    let button_w = (ui.available_width() - 12.0) / 2.0;
    let button_h = 64.0;

    let mut picked = None;
    for row in view.options.chunks(2) {
        ui.horizontal(|ui| {
            for option in row {
                let text = if option.wrong_pick {
                    RichText::new(format!("❌ {}", option.value)).size(28.0).color(RED)
                } else {
                    RichText::new(option.value.to_string()).size(28.0)
                };
                let button = ui.add_enabled_ui(!option.wrong_pick, |ui| {
                    ui.add_sized([button_w, button_h], Button::new(text))
                });
                if button.inner.clicked() {
                    picked = Some(option.value);
                }
            }
        });
        ui.add_space(8.0);
    }

    if let Some(value) = picked {
        app.select_option(value);
    }
}

fn reveal_card(app: &mut QuizApp, ui: &mut Ui, view: &QuizView) {
    if let Some(kou_jue) = &view.kou_jue {
        ui.label(RichText::new(kou_jue).size(40.0).color(PURPLE).strong());
    }
    ui.add_space(12.0);

    if let Some(mnemonic) = app.mnemonic.clone() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&mnemonic.rhyme).size(20.0).strong());
                ui.add_space(4.0);
                ui.label(RichText::new(&mnemonic.visual_cue).color(GRAY));
                ui.add_space(4.0);
                ui.label(RichText::new(&mnemonic.emojis).size(24.0));
            });
        });
    }

    ui.add_space(16.0);
    let next = ui.add_sized(
        [(ui.available_width() * 0.8).min(360.0), 44.0],
        Button::new(RichText::new("下一题 ➡").size(20.0)),
    );
    if next.clicked() {
        app.next_question();
    }
}
