use super::*;
use crate::data;
use crate::model::{compute_score, ConfidenceLevel, NewQuizResult};

impl QuizApp {
    /// Siembra la sesión de un quiz de tema. Lo invoca la pantalla de quiz al
    /// entrar sin datos iniciales; la sesión resultante nunca lleva `id`.
    pub fn begin_topic_quiz(&mut self) {
        let topic = {
            let t = self.topic_input.trim();
            if t.is_empty() {
                "Repaso general".to_owned()
            } else {
                t.to_owned()
            }
        };
        let questions = data::generate_questions(&topic);
        let quiz_name = format!("Quiz de {topic}");

        self.quiz_initial_data = Some(InProgressQuizState::fresh(
            None,
            topic,
            quiz_name,
            String::new(),
            String::new(),
            questions,
        ));
        self.elapsed_accum = 0.0;
    }

    /// Archivo procesado: guarda las preguntas y pasa a configuración con un
    /// registro pre-rellenado a partir del nombre del archivo.
    pub fn procesar_archivos(&mut self, questions: Vec<Question>, file_name: &str) {
        self.generated_questions = Some(questions.clone());
        self.quiz_initial_data = Some(InProgressQuizState::prefill_from_upload(
            file_name, questions,
        ));
        self.state = AppState::QuizSetup;
        self.message.clear();
    }

    /// Configuración completada: fusiona los datos editados con las preguntas
    /// generadas e inicializa los vectores de respuesta. Sin preguntas
    /// generadas no hay nada que configurar.
    pub fn completar_configuracion(&mut self) {
        let (questions, setup) = match (
            self.generated_questions.as_ref(),
            self.quiz_initial_data.as_ref(),
        ) {
            (Some(q), Some(s)) => (q.clone(), s.clone()),
            _ => return,
        };

        self.generated_questions = None;
        self.quiz_initial_data = Some(InProgressQuizState::fresh(
            setup.id,
            setup.topic,
            setup.quiz_name,
            setup.subject,
            setup.chapter,
            questions,
        ));
        self.elapsed_accum = 0.0;
        self.state = AppState::Quiz;
        self.message.clear();
    }

    /// Quiz terminado: puntúa con el pliegue posicional, persiste a través
    /// del colaborador de storage y adopta el resultado devuelto.
    pub fn terminar_quiz(&mut self) {
        let session = match self.quiz_initial_data.take() {
            Some(s) => s,
            None => return,
        };

        let score = compute_score(&session.questions, &session.user_answers);
        let new = NewQuizResult {
            topic: session.topic,
            quiz_name: session.quiz_name,
            subject: session.subject,
            chapter: session.chapter,
            questions: session.questions,
            user_answers: session.user_answers,
            confidence_levels: session.confidence_levels,
            score,
            time_taken_seconds: session.elapsed_seconds,
        };

        let saved = self.storage.save_quiz_result(new);
        log::info!(
            "quiz '{}' terminado: {}/{} en {}s",
            saved.quiz_name,
            saved.score,
            saved.questions.len(),
            saved.time_taken_seconds
        );

        self.history.push(saved.clone());
        self.active_result = Some(saved);
        self.elapsed_accum = 0.0;
        self.state = AppState::Results;
    }

    /// Retake: sesión nueva sembrada con las preguntas del resultado activo.
    /// Conserva id/tema/nombre/asignatura/capítulo; resetea todo lo demás.
    pub fn retomar_quiz(&mut self) {
        let result = match self.active_result.as_ref() {
            Some(r) => r.clone(),
            None => return,
        };

        self.quiz_initial_data = Some(InProgressQuizState::fresh(
            Some(result.id),
            result.topic,
            result.quiz_name,
            result.subject,
            result.chapter,
            result.questions,
        ));
        self.elapsed_accum = 0.0;
        self.state = AppState::Quiz;
        self.message.clear();
    }

    // --- Interacción dentro del quiz ---

    pub fn seleccionar_respuesta(&mut self, option: &str) {
        let idx = match self.current_question() {
            Some((idx, _)) => idx,
            None => return,
        };
        if let Some(session) = self.session_mut() {
            session.user_answers[idx] = Some(option.to_owned());
        }
    }

    pub fn fijar_confianza(&mut self, level: ConfidenceLevel) {
        let idx = match self.current_question() {
            Some((idx, _)) => idx,
            None => return,
        };
        if let Some(session) = self.session_mut() {
            session.confidence_levels[idx] = Some(level);
        }
    }

    pub fn alternar_marca(&mut self) {
        let idx = match self.current_question() {
            Some((idx, _)) => idx,
            None => return,
        };
        if let Some(session) = self.session_mut() {
            session.flagged[idx] = !session.flagged[idx];
        }
    }

    pub fn pregunta_siguiente(&mut self) {
        if let Some(session) = self.session_mut() {
            if session.current_question_index + 1 < session.questions.len() {
                session.current_question_index += 1;
            }
        }
    }

    pub fn pregunta_anterior(&mut self) {
        if let Some(session) = self.session_mut() {
            if session.current_question_index > 0 {
                session.current_question_index -= 1;
            }
        }
    }

    /// La pantalla reporta el delta de frame; el controlador solo acumula
    /// segundos enteros en la sesión (no mantiene reloj propio).
    pub fn registrar_tiempo(&mut self, dt: f32) {
        if self.quiz_initial_data.is_none() {
            return;
        }
        self.elapsed_accum += dt.max(0.0);
        let whole = self.elapsed_accum.floor();
        if whole >= 1.0 {
            self.elapsed_accum -= whole;
            if let Some(session) = self.session_mut() {
                session.elapsed_seconds += whole as u64;
            }
        }
    }
}
