use crate::model::{AppState, InProgressQuizState, Question, QuizResult};
use crate::storage::QuizStorage;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{DashboardMetrics, HistoryRow, SubjectPerformance};

/// Controlador de la aplicación. Toda coordinación pasa por aquí: cada
/// pantalla solo recibe datos y dispara callbacks sobre este struct.
#[derive(Serialize, Deserialize)]
pub struct QuizApp {
    /// Sesión de quiz en curso (o pre-relleno de configuración).
    pub quiz_initial_data: Option<InProgressQuizState>,
    /// Resultado seleccionado para resultados/revisión.
    pub active_result: Option<QuizResult>,
    /// Preguntas de un archivo subido, a la espera de la configuración.
    pub generated_questions: Option<Vec<Question>>,
    /// Tema tecleado en el panel para generar un quiz nuevo.
    #[serde(skip)]
    pub topic_input: String,

    #[serde(skip)]
    pub is_logged_in: bool,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub message: String,
    #[serde(skip)]
    pub username_input: String,
    #[serde(skip)]
    pub password_input: String,
    #[serde(skip)]
    pub upload_path_input: String,
    #[serde(skip)]
    pub upload_text_input: String,
    /// Fracción de segundo pendiente de volcar a la sesión.
    #[serde(skip)]
    pub elapsed_accum: f32,
    #[serde(skip)]
    pub history: Vec<QuizResult>,
    #[serde(skip)]
    pub storage: QuizStorage,
}

impl Default for QuizApp {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizApp {
    pub fn new() -> Self {
        Self::with_storage(QuizStorage::new())
    }

    pub fn with_storage(storage: QuizStorage) -> Self {
        Self {
            quiz_initial_data: None,
            active_result: None,
            generated_questions: None,
            topic_input: String::new(),
            is_logged_in: false,
            state: AppState::Auth,
            message: String::new(),
            username_input: String::new(),
            password_input: String::new(),
            upload_path_input: String::new(),
            upload_text_input: String::new(),
            elapsed_accum: 0.0,
            history: Vec::new(),
            storage,
        }
    }

    /// Recarga el historial desde el colaborador de persistencia.
    pub fn refresh_history(&mut self) {
        self.history = self.storage.load_all();
    }
}
