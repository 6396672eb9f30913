use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Autovaloración del usuario sobre una respuesta.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub const ALL: [ConfidenceLevel; 3] = [
        ConfidenceLevel::High,
        ConfidenceLevel::Medium,
        ConfidenceLevel::Low,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "Alta",
            ConfidenceLevel::Medium => "Media",
            ConfidenceLevel::Low => "Baja",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Auth,
    Dashboard,
    Quiz,
    Results,
    ReviewLive,
    ReviewHistory,
    Upload,
    QuizSetup,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Auth
    }
}

/// Sesión de quiz en curso. Vive solo mientras dura un intento:
/// se destruye al terminar o al volver al panel.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InProgressQuizState {
    /// Solo presente si la sesión proviene de un retake.
    #[serde(default)]
    pub id: Option<String>,
    pub topic: String,
    pub quiz_name: String,
    pub subject: String,
    pub chapter: String,
    pub questions: Vec<Question>,
    pub user_answers: Vec<Option<String>>,
    pub confidence_levels: Vec<Option<ConfidenceLevel>>,
    pub flagged: Vec<bool>,
    pub current_question_index: usize,
    pub elapsed_seconds: u64,
}

impl InProgressQuizState {
    /// Sesión lista para responder: los tres vectores por pregunta arrancan
    /// en None/None/false con la longitud del banco de preguntas.
    pub fn fresh(
        id: Option<String>,
        topic: String,
        quiz_name: String,
        subject: String,
        chapter: String,
        questions: Vec<Question>,
    ) -> Self {
        let n = questions.len();
        Self {
            id,
            topic,
            quiz_name,
            subject,
            chapter,
            questions,
            user_answers: vec![None; n],
            confidence_levels: vec![None; n],
            flagged: vec![false; n],
            current_question_index: 0,
            elapsed_seconds: 0,
        }
    }

    /// Registro de pre-relleno para la pantalla de configuración tras subir
    /// un archivo. Los vectores de respuesta se inicializan al completar la
    /// configuración, no aquí.
    pub fn prefill_from_upload(file_name: &str, questions: Vec<Question>) -> Self {
        Self {
            id: None,
            topic: file_name.to_owned(),
            quiz_name: file_name.to_owned(),
            subject: String::new(),
            chapter: String::new(),
            questions,
            user_answers: vec![],
            confidence_levels: vec![],
            flagged: vec![],
            current_question_index: 0,
            elapsed_seconds: 0,
        }
    }

    pub fn arrays_consistent(&self) -> bool {
        let n = self.questions.len();
        self.user_answers.len() == n
            && self.confidence_levels.len() == n
            && self.flagged.len() == n
    }
}

/// Resultado aún sin identidad: lo que el controlador entrega a storage.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewQuizResult {
    pub topic: String,
    pub quiz_name: String,
    pub subject: String,
    pub chapter: String,
    pub questions: Vec<Question>,
    pub user_answers: Vec<Option<String>>,
    pub confidence_levels: Vec<Option<ConfidenceLevel>>,
    pub score: usize,
    pub time_taken_seconds: u64,
}

/// Resultado persistido; storage le asigna `id` y `date`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizResult {
    pub id: String,
    pub topic: String,
    pub quiz_name: String,
    pub subject: String,
    pub chapter: String,
    pub questions: Vec<Question>,
    pub user_answers: Vec<Option<String>>,
    pub confidence_levels: Vec<Option<ConfidenceLevel>>,
    pub score: usize,
    pub time_taken_seconds: u64,
    pub date: DateTime<Utc>,
}

/// Pliegue posicional respuestas × preguntas. Igualdad estricta contra
/// `correct_answer`; una respuesta ausente nunca puntúa.
pub fn compute_score(questions: &[Question], user_answers: &[Option<String>]) -> usize {
    user_answers
        .iter()
        .zip(questions.iter())
        .fold(0, |acc, (answer, q)| match answer {
            Some(a) if *a == q.correct_answer => acc + 1,
            _ => acc,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: &str) -> Question {
        Question {
            question: "¿?".into(),
            options: vec!["A".into(), "B".into(), "C".into()],
            correct_answer: correct.into(),
            explanation: String::new(),
        }
    }

    #[test]
    fn score_counts_only_exact_matches() {
        let questions = vec![question("A"), question("B"), question("C")];
        let answers = vec![Some("A".to_string()), None, Some("C".to_string())];
        assert_eq!(compute_score(&questions, &answers), 2);
    }

    #[test]
    fn missing_answers_never_score() {
        let questions = vec![question("A"), question("B")];
        let answers = vec![None, None];
        assert_eq!(compute_score(&questions, &answers), 0);
    }

    #[test]
    fn comparison_is_strict() {
        let questions = vec![question("A")];
        let answers = vec![Some("a".to_string())];
        assert_eq!(compute_score(&questions, &answers), 0);
    }

    #[test]
    fn fresh_session_has_reset_arrays() {
        let s = InProgressQuizState::fresh(
            None,
            "Tema".into(),
            "Quiz".into(),
            String::new(),
            String::new(),
            vec![question("A"), question("B")],
        );
        assert!(s.arrays_consistent());
        assert_eq!(s.user_answers, vec![None, None]);
        assert_eq!(s.confidence_levels, vec![None, None]);
        assert_eq!(s.flagged, vec![false, false]);
        assert_eq!(s.current_question_index, 0);
        assert_eq!(s.elapsed_seconds, 0);
    }
}
