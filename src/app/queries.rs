use super::*;

impl QuizApp {
    // Accesores seguros sobre la sesión opcional
    pub fn session(&self) -> Option<&InProgressQuizState> {
        self.quiz_initial_data.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut InProgressQuizState> {
        self.quiz_initial_data.as_mut()
    }

    /// Índice y pregunta actuales, si hay sesión con vectores bien formados.
    pub fn current_question(&self) -> Option<(usize, &Question)> {
        let session = self.session()?;
        if !session.arrays_consistent() {
            return None;
        }
        let idx = session.current_question_index;
        session.questions.get(idx).map(|q| (idx, q))
    }

    /// Hay una sesión empezada con preguntas que se puede reentrar.
    pub fn has_resumable_session(&self) -> bool {
        self.session()
            .map(|s| s.arrays_consistent() && !s.questions.is_empty())
            .unwrap_or(false)
    }

    pub fn answered_count(&self) -> usize {
        self.session()
            .map(|s| s.user_answers.iter().filter(|a| a.is_some()).count())
            .unwrap_or(0)
    }
}
