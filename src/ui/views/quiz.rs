use crate::QuizApp;
use crate::model::{ConfidenceLevel, Question};
use crate::ui::helpers::option_button;
use crate::ui::layout::two_button_row;
use egui::{Align, Button, CentralPanel, Context, RichText, ScrollArea, SelectableLabel};

struct QuestionSnapshot {
    quiz_name: String,
    idx: usize,
    total: usize,
    question: Question,
    answer: Option<String>,
    confidence: Option<ConfidenceLevel>,
    flagged: bool,
    elapsed: u64,
    answered: usize,
}

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    // Entrar sin datos iniciales significa quiz nuevo desde tema
    if app.quiz_initial_data.is_none() {
        app.begin_topic_quiz();
    }

    // El reloj de la sesión solo avanza con el delta que reporta la pantalla
    app.registrar_tiempo(ctx.input(|i| i.stable_dt));
    ctx.request_repaint_after(std::time::Duration::from_millis(250));

    let snapshot = app.session().and_then(|s| {
        if !s.arrays_consistent() || s.questions.is_empty() {
            return None;
        }
        let idx = s.current_question_index.min(s.questions.len() - 1);
        Some(QuestionSnapshot {
            quiz_name: s.quiz_name.clone(),
            idx,
            total: s.questions.len(),
            question: s.questions[idx].clone(),
            answer: s.user_answers[idx].clone(),
            confidence: s.confidence_levels[idx],
            flagged: s.flagged[idx],
            elapsed: s.elapsed_seconds,
            answered: app.answered_count(),
        })
    });

    let snap = match snapshot {
        Some(s) => s,
        None => {
            // Banco vacío o sesión mal formada: no hay quiz que mostrar
            CentralPanel::default().show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label("No hay preguntas para este quiz.");
                    ui.add_space(10.0);
                    if ui.button("Volver al panel").clicked() {
                        app.volver_al_panel();
                    }
                });
            });
            return;
        }
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

                    ui.heading(&snap.quiz_name);
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.label(format!("Pregunta {} de {}", snap.idx + 1, snap.total));
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(format!("⏱ {}", format_time(snap.elapsed)));
                                ui.label(format!(
                                    "Respondidas: {}/{}",
                                    snap.answered, snap.total
                                ));
                            },
                        );
                    });
                    ui.separator();
                    ui.add_space(8.0);

                    // Enunciado con scroll acotado
                    ui.allocate_ui_with_layout(
                        egui::vec2(panel_width, 90.0),
                        egui::Layout::top_down(Align::Min),
                        |ui| {
                            ScrollArea::vertical().max_height(90.0).show(ui, |ui| {
                                ui.label(
                                    RichText::new(&snap.question.question).size(16.0),
                                );
                            });
                        },
                    );
                    ui.add_space(8.0);

                    // Opciones de respuesta
                    for option in &snap.question.options {
                        let selected = snap.answer.as_deref() == Some(option.as_str());
                        if option_button(ui, option, selected, panel_width * 0.9) {
                            app.seleccionar_respuesta(option);
                        }
                        ui.add_space(3.0);
                    }

                    ui.add_space(8.0);

                    // Confianza y marca de repaso
                    ui.horizontal(|ui| {
                        ui.label("Confianza:");
                        for level in ConfidenceLevel::ALL {
                            let selected = snap.confidence == Some(level);
                            if ui
                                .add(SelectableLabel::new(selected, level.label()))
                                .clicked()
                            {
                                app.fijar_confianza(level);
                            }
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                let flag_label = if snap.flagged {
                                    "🚩 Marcada"
                                } else {
                                    "⚐ Marcar para repasar"
                                };
                                if ui
                                    .add(SelectableLabel::new(snap.flagged, flag_label))
                                    .clicked()
                                {
                                    app.alternar_marca();
                                }
                            },
                        );
                    });

                    ui.add_space(12.0);
                    let (anterior, siguiente) =
                        two_button_row(ui, panel_width, "⬅ Anterior", "Siguiente ➡");
                    if anterior {
                        app.pregunta_anterior();
                    }
                    if siguiente {
                        app.pregunta_siguiente();
                    }

                    ui.add_space(8.0);
                    if ui
                        .add_sized([panel_width / 2.0, 36.0], Button::new("Terminar quiz"))
                        .clicked()
                    {
                        app.terminar_quiz();
                    }
                });
        });
    });
}

fn format_time(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
