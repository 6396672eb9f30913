use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, TextEdit};

pub fn ui_quiz_setup(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 380.0, 520.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Configurar quiz");
            ui.add_space(10.0);

            let question_count = app
                .session()
                .map(|s| s.questions.len())
                .unwrap_or(0);
            ui.label(format!("{question_count} preguntas cargadas"));
            ui.add_space(12.0);

            let field_w = (ui.available_width() * 0.9).clamp(200.0, 420.0);

            // Edición in situ del registro pre-rellenado
            if let Some(setup) = app.session_mut() {
                ui.label("Nombre del quiz");
                ui.add_sized(
                    [field_w, 28.0],
                    TextEdit::singleline(&mut setup.quiz_name),
                );
                ui.add_space(5.0);
                ui.label("Tema");
                ui.add_sized([field_w, 28.0], TextEdit::singleline(&mut setup.topic));
                ui.add_space(5.0);
                ui.label("Asignatura");
                ui.add_sized([field_w, 28.0], TextEdit::singleline(&mut setup.subject));
                ui.add_space(5.0);
                ui.label("Capítulo");
                ui.add_sized([field_w, 28.0], TextEdit::singleline(&mut setup.chapter));
            }

            ui.add_space(16.0);
            let (atras, empezar) = two_button_row(ui, field_w, "Atrás", "Empezar quiz");
            if atras {
                app.volver_al_panel();
            }
            if empezar {
                app.completar_configuracion();
            }
        });
    });
}
