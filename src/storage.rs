//! Persistencia de resultados de quiz.
//!
//! Guarda el historial en un archivo YAML dentro del directorio de datos de
//! la plataforma. Es el único componente que asigna `id` y `date` a un
//! resultado.

use crate::model::{NewQuizResult, QuizResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "quiz_builder";
const RESULTS_FILE: &str = "quiz_results.yaml";

#[derive(Debug, Clone)]
pub struct QuizStorage {
    results_path: PathBuf,
}

/// Estructura del archivo de resultados en disco.
#[derive(Serialize, Deserialize)]
struct ResultsFile {
    version: u32,
    results: Vec<QuizResult>,
}

impl Default for ResultsFile {
    fn default() -> Self {
        Self {
            version: 1,
            results: Vec::new(),
        }
    }
}

impl Default for QuizStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizStorage {
    /// Ruta estándar: $DATA_HOME/quiz_builder/quiz_results.yaml, con caída
    /// al directorio actual si la plataforma no expone un data dir.
    pub fn new() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            results_path: base.join(APP_DIR).join(RESULTS_FILE),
        }
    }

    pub fn with_path(results_path: PathBuf) -> Self {
        Self { results_path }
    }

    /// Persiste un resultado nuevo asignándole identidad y fecha. El fallo de
    /// lectura o escritura se registra pero no se propaga: el resultado
    /// devuelto sigue siendo válido para la sesión en curso. Con un historial
    /// existente pero ilegible no se escribe nada, para no machacar datos
    /// que aún podrían recuperarse.
    pub fn save_quiz_result(&self, new: NewQuizResult) -> QuizResult {
        let loaded = self.load();
        let seq = loaded.as_ref().map(|r| r.len() + 1).unwrap_or(1);
        let date = Utc::now();
        let id = format!("quiz-{}-{}", date.timestamp_millis(), seq);

        let result = QuizResult {
            id,
            topic: new.topic,
            quiz_name: new.quiz_name,
            subject: new.subject,
            chapter: new.chapter,
            questions: new.questions,
            user_answers: new.user_answers,
            confidence_levels: new.confidence_levels,
            score: new.score,
            time_taken_seconds: new.time_taken_seconds,
            date,
        };

        match loaded {
            Ok(mut results) => {
                results.push(result.clone());
                if let Err(e) = self.persist(results) {
                    log::warn!(
                        "no se pudo escribir {}: {e}",
                        self.results_path.display()
                    );
                }
            }
            Err(e) => {
                log::warn!(
                    "historial ilegible en {}: {e}; se omite la escritura",
                    self.results_path.display()
                );
            }
        }
        result
    }

    /// Carga el historial completo; un archivo ausente o corrupto equivale a
    /// historial vacío.
    pub fn load_all(&self) -> Vec<QuizResult> {
        match self.load() {
            Ok(results) => results,
            Err(e) => {
                log::warn!(
                    "no se pudo leer {}: {e}",
                    self.results_path.display()
                );
                Vec::new()
            }
        }
    }

    fn load(&self) -> Result<Vec<QuizResult>, Box<dyn std::error::Error>> {
        if !self.results_path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.results_path)?;
        let file: ResultsFile = serde_yaml::from_str(&content)?;
        Ok(file.results)
    }

    fn persist(&self, results: Vec<QuizResult>) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = self.results_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = ResultsFile {
            version: 1,
            results,
        };
        let content = serde_yaml::to_string(&file)?;
        fs::write(&self.results_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;
    use tempfile::TempDir;

    fn new_result(name: &str) -> NewQuizResult {
        NewQuizResult {
            topic: "Historia".into(),
            quiz_name: name.into(),
            subject: "Historia".into(),
            chapter: "1".into(),
            questions: vec![Question {
                question: "¿?".into(),
                options: vec!["A".into(), "B".into()],
                correct_answer: "A".into(),
                explanation: String::new(),
            }],
            user_answers: vec![Some("A".into())],
            confidence_levels: vec![None],
            score: 1,
            time_taken_seconds: 30,
        }
    }

    #[test]
    fn save_assigns_id_and_date() {
        let tmp = TempDir::new().unwrap();
        let storage = QuizStorage::with_path(tmp.path().join("results.yaml"));

        let saved = storage.save_quiz_result(new_result("Quiz 1"));
        assert!(!saved.id.is_empty());
        assert!(saved.date <= Utc::now());
        assert_eq!(saved.score, 1);
    }

    #[test]
    fn saved_ids_are_unique() {
        let tmp = TempDir::new().unwrap();
        let storage = QuizStorage::with_path(tmp.path().join("results.yaml"));

        let a = storage.save_quiz_result(new_result("Quiz 1"));
        let b = storage.save_quiz_result(new_result("Quiz 2"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn load_all_roundtrips_saved_results() {
        let tmp = TempDir::new().unwrap();
        let storage = QuizStorage::with_path(tmp.path().join("results.yaml"));

        storage.save_quiz_result(new_result("Quiz 1"));
        storage.save_quiz_result(new_result("Quiz 2"));

        let all = storage.load_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].quiz_name, "Quiz 1");
        assert_eq!(all[1].quiz_name, "Quiz 2");
    }

    #[test]
    fn unreadable_history_is_never_overwritten_on_save() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("results.yaml");
        let storage = QuizStorage::with_path(path.clone());

        storage.save_quiz_result(new_result("Quiz 1"));
        storage.save_quiz_result(new_result("Quiz 2"));

        // Archivo corrupto (escritura interrumpida a mitad de documento)
        let corrupt = "version: 1\nresults: [esto quedó, a medias";
        fs::write(&path, corrupt).unwrap();

        let saved = storage.save_quiz_result(new_result("Quiz 3"));
        assert!(!saved.id.is_empty());
        // El contenido en disco queda intacto para recuperarlo a mano
        assert_eq!(fs::read_to_string(&path).unwrap(), corrupt);
    }

    #[test]
    fn missing_file_is_empty_history() {
        let tmp = TempDir::new().unwrap();
        let storage = QuizStorage::with_path(tmp.path().join("no_existe.yaml"));
        assert!(storage.load_all().is_empty());
    }
}
