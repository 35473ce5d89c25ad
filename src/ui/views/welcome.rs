use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, RichText};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(
                RichText::new("像素九九乘法")
                    .size(36.0)
                    .color(Color32::from_rgb(234, 179, 8))
                    .strong(),
            );
            ui.add_space(8.0);
            ui.label("选出正确的答案，背出乘法口诀！");
            ui.add_space(24.0);

            let btn_w = (ui.available_width() * 0.9).clamp(160.0, 360.0);
            let btn_h = 40.0;

            let start = ui.add_sized([btn_w, btn_h], Button::new("▶ 开始练习"));
            ui.add_space(5.0);
            let exit = ui.add_sized([btn_w, btn_h], Button::new("❌ 退出"));

            if start.clicked() {
                app.start_quiz();
            }
            if exit.clicked() {
                std::process::exit(0);
            }
        });
    });
}
