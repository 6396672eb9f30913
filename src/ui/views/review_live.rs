use crate::QuizApp;
use egui::{CentralPanel, Color32, Context, RichText, ScrollArea};

pub fn ui_review_live(app: &mut QuizApp, ctx: &Context) {
    let result = match app.active_result.clone() {
        Some(r) => r,
        None => return,
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading(format!("Revisión — {}", result.quiz_name));
                    ui.add_space(10.0);

                    ScrollArea::vertical().show(ui, |ui| {
                        for (i, q) in result.questions.iter().enumerate() {
                            let answer = result.user_answers.get(i).cloned().flatten();
                            let correct =
                                answer.as_deref() == Some(q.correct_answer.as_str());
                            let confidence = result
                                .confidence_levels
                                .get(i)
                                .copied()
                                .flatten()
                                .map(|c| c.label())
                                .unwrap_or("—");

                            ui.label(
                                RichText::new(format!("{}. {}", i + 1, q.question)).strong(),
                            );
                            match &answer {
                                Some(a) if correct => {
                                    ui.label(
                                        RichText::new(format!("✅ Tu respuesta: {a}"))
                                            .color(Color32::LIGHT_GREEN),
                                    );
                                }
                                Some(a) => {
                                    ui.label(
                                        RichText::new(format!("❌ Tu respuesta: {a}"))
                                            .color(Color32::LIGHT_RED),
                                    );
                                    ui.label(format!("Correcta: {}", q.correct_answer));
                                }
                                None => {
                                    ui.label(
                                        RichText::new("❌ Sin responder")
                                            .color(Color32::LIGHT_RED),
                                    );
                                    ui.label(format!("Correcta: {}", q.correct_answer));
                                }
                            }
                            if !q.explanation.is_empty() {
                                ui.label(format!("💡 {}", q.explanation));
                            }
                            ui.label(format!("Confianza: {confidence}"));
                            ui.add_space(8.0);
                            ui.separator();
                            ui.add_space(8.0);
                        }
                    });

                    ui.add_space(10.0);
                    if ui.button("🏠 Volver al panel").clicked() {
                        app.volver_al_panel();
                    }
                });
        });
    });
}
