use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Button, Context, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let result = match app.active_result.clone() {
        Some(r) => r,
        None => return,
    };

    centered_panel(ctx, 340.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Resultados");
            ui.add_space(6.0);
            ui.label(&result.quiz_name);
            if !result.subject.is_empty() {
                ui.label(format!("Asignatura: {}", result.subject));
            }
            ui.add_space(14.0);

            let total = result.questions.len();
            let pct = if total == 0 {
                0.0
            } else {
                result.score as f32 * 100.0 / total as f32
            };
            ui.label(
                RichText::new(format!("{} / {}", result.score, total))
                    .size(36.0)
                    .strong(),
            );
            ui.label(format!("{pct:.0}% de aciertos"));
            ui.add_space(6.0);
            ui.label(format!(
                "⏱ {:02}:{:02}   📅 {}",
                result.time_taken_seconds / 60,
                result.time_taken_seconds % 60,
                result.date.format("%d/%m/%Y %H:%M"),
            ));

            ui.add_space(18.0);
            let panel_width = (ui.available_width() * 0.9).clamp(200.0, 420.0);
            let (revisar, retomar) =
                two_button_row(ui, panel_width, "🔍 Revisar respuestas", "🔄 Retomar quiz");
            if revisar {
                app.empezar_revision();
            }
            if retomar {
                app.retomar_quiz();
            }
            ui.add_space(5.0);
            if ui
                .add_sized([panel_width, 36.0], Button::new("🏠 Volver al panel"))
                .clicked()
            {
                app.volver_al_panel();
            }
        });
    });
}
