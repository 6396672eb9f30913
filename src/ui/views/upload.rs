use crate::data;
use crate::QuizApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Context, TextEdit};

pub fn ui_upload(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 420.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Crear quiz desde archivo");
            ui.add_space(10.0);
            ui.label("Archivo YAML con una lista de preguntas (question, options, correct_answer, explanation).");
            ui.add_space(12.0);

            let field_w = (ui.available_width() * 0.95).clamp(200.0, 480.0);

            ui.add_sized(
                [field_w, 28.0],
                TextEdit::singleline(&mut app.upload_path_input)
                    .hint_text("Ruta del archivo, p. ej. /home/ana/tema3.yaml"),
            );
            ui.add_space(5.0);
            if ui.button("Cargar archivo").clicked() {
                let path = app.upload_path_input.trim().to_owned();
                match data::read_questions_from_path(&path) {
                    Ok((questions, file_name)) if !questions.is_empty() => {
                        app.procesar_archivos(questions, &file_name);
                    }
                    Ok(_) => {
                        app.message = "⚠ El archivo no contiene preguntas.".into();
                    }
                    Err(e) => {
                        log::warn!("fallo leyendo {path}: {e}");
                        app.message = "⚠ No se pudo leer el archivo.".into();
                    }
                }
            }

            ui.add_space(14.0);
            ui.separator();
            ui.add_space(8.0);
            ui.label("…o pega aquí el contenido:");
            ui.add_sized(
                [field_w, 140.0],
                TextEdit::multiline(&mut app.upload_text_input).code_editor(),
            );
            ui.add_space(5.0);
            if ui.button("Procesar texto").clicked() {
                match data::parse_questions(&app.upload_text_input) {
                    Ok(questions) if !questions.is_empty() => {
                        app.procesar_archivos(questions, "Preguntas pegadas");
                    }
                    Ok(_) => {
                        app.message = "⚠ El texto no contiene preguntas.".into();
                    }
                    Err(e) => {
                        log::warn!("fallo parseando texto pegado: {e}");
                        app.message = "⚠ El formato no es válido.".into();
                    }
                }
            }

            ui.add_space(12.0);
            let (volver, limpiar) = two_button_row(ui, field_w, "Volver", "Limpiar");
            if volver {
                app.volver_al_panel();
            }
            if limpiar {
                app.upload_path_input.clear();
                app.upload_text_input.clear();
                app.message.clear();
            }

            if !app.message.is_empty() {
                ui.add_space(8.0);
                ui.label(&app.message);
            }
        });
    });
}
