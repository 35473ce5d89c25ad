use crate::app::QuizApp;
use egui::{CentralPanel, Context, Frame, Ui, Visuals};

/// Top bar during the quiz: score reset and the sound toggle.
pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 重新开始").clicked() {
                app.reset_session();
            }

            let sound_label = if app.sound_enabled {
                "🔊 音效：开"
            } else {
                "🔇 音效：关"
            };
            if ui.button(sound_label).clicked() {
                app.toggle_sound();
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 夜间模式").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ 日间模式").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Central panel with the content block centered both ways, capped at
/// `max_width`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}
