use crate::QuizApp;
use crate::ui::helpers::big_list_button;
use egui::{CentralPanel, Context, Grid, RichText, ScrollArea, TextEdit};

pub fn ui_dashboard(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 620.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let btn_h = 40.0;

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 20))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading("Panel principal");
                    ui.add_space(12.0);

                    // ----------- MÉTRICAS DEL HISTORIAL -----------
                    let metrics = app.dashboard_metrics();
                    if metrics.total_quizzes == 0 {
                        ui.label("Todavía no hay quizzes completados.");
                    } else {
                        ui.label(format!(
                            "Quizzes: {}   Preguntas: {}   ✅ {}   ❌ {}   Acierto global: {:.0}%",
                            metrics.total_quizzes,
                            metrics.total_questions,
                            metrics.total_correct,
                            metrics.total_incorrect,
                            metrics.overall_percentage,
                        ));
                        ui.add_space(8.0);

                        ScrollArea::vertical().max_height(160.0).show(ui, |ui| {
                            Grid::new("subject_grid")
                                .striped(true)
                                .spacing([12.0, 4.0])
                                .show(ui, |ui| {
                                    ui.label(RichText::new("Asignatura").strong());
                                    ui.label(RichText::new("Aciertos").strong());
                                    ui.label(RichText::new("Total").strong());
                                    ui.label(RichText::new("%").strong());
                                    ui.end_row();

                                    for s in &metrics.subject_performance {
                                        ui.label(&s.subject);
                                        ui.label(format!("{}", s.correct));
                                        ui.label(format!("{}", s.total));
                                        ui.label(format!("{:.0}%", s.percentage));
                                        ui.end_row();
                                    }
                                });
                        });
                    }

                    ui.add_space(16.0);
                    ui.separator();
                    ui.add_space(16.0);

                    // ----------- ACCIONES -----------
                    let btn_w = (panel_width * 0.9).clamp(160.0, 420.0);

                    ui.label("Tema para un quiz nuevo:");
                    ui.add_sized(
                        [btn_w, 28.0],
                        TextEdit::singleline(&mut app.topic_input)
                            .hint_text("p. ej. Historia, Ciencia, Programación"),
                    );
                    // Sesión restaurada de un arranque anterior: ofrecer retomarla
                    if app.has_resumable_session() {
                        ui.add_space(5.0);
                        if big_list_button(ui, "▶ Continuar quiz".into(), btn_w, btn_h, true) {
                            app.continuar_quiz();
                        }
                    }
                    ui.add_space(5.0);
                    if big_list_button(ui, "⚡ Generar quiz".into(), btn_w, btn_h, true) {
                        app.generar_quiz();
                    }
                    ui.add_space(5.0);
                    if big_list_button(ui, "📁 Crear desde archivo".into(), btn_w, btn_h, true) {
                        app.crear_desde_archivo();
                    }
                    ui.add_space(5.0);
                    if big_list_button(ui, "📜 Ver historial".into(), btn_w, btn_h, true) {
                        app.ver_historial();
                    }

                    if !app.message.is_empty() {
                        ui.add_space(8.0);
                        ui.label(&app.message);
                    }
                });
        });
    });
}
