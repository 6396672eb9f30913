use crate::QuizApp;
use egui::{CentralPanel, Context, Grid, RichText, ScrollArea};

pub fn ui_review_history(app: &mut QuizApp, ctx: &Context) {
    let rows = app.history_rows();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 620.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 16))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading("Historial de quizzes");
                    ui.add_space(10.0);

                    if rows.is_empty() {
                        ui.label("Todavía no has completado ningún quiz.");
                    } else {
                        ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                            Grid::new("history_grid")
                                .striped(true)
                                .spacing([12.0, 6.0])
                                .show(ui, |ui| {
                                    ui.label(RichText::new("Quiz").strong());
                                    ui.label(RichText::new("Fecha").strong());
                                    ui.label(RichText::new("Nota").strong());
                                    ui.label("");
                                    ui.end_row();

                                    for row in &rows {
                                        ui.label(row.label());
                                        ui.label(&row.date_label);
                                        ui.label(format!("{}/{}", row.score, row.total));
                                        if ui.button("Ver").clicked() {
                                            app.revisar_por_id(&row.id);
                                        }
                                        ui.end_row();
                                    }
                                });
                        });
                    }

                    ui.add_space(12.0);
                    if ui.button("🏠 Volver al panel").clicked() {
                        app.volver_al_panel();
                    }
                });
        });
    });
}
