use super::*;

impl QuizApp {
    /// Descarta todo el contexto de sesión de una vez: resultado activo,
    /// quiz en curso y preguntas generadas pendientes.
    pub fn clear_session_data(&mut self) {
        self.active_result = None;
        self.quiz_initial_data = None;
        self.generated_questions = None;
        self.elapsed_accum = 0.0;
    }
}
