// src/data.rs

use crate::model::Question;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::path::Path;

/// Preguntas por quiz cuando se genera desde un tema.
pub const TOPIC_QUIZ_SIZE: usize = 5;

#[derive(Deserialize, Debug, Clone)]
struct BankTopic {
    topic: String,
    questions: Vec<Question>,
}

/// Carga el banco de temas desde el YAML embebido
fn read_bank_embedded() -> Vec<BankTopic> {
    let file_content = include_str!("data/topic_bank.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el banco de temas YAML")
}

/// Genera las preguntas para un quiz de tema libre. Si el tema coincide con
/// alguno del banco se usa ese bloque; si no, se muestrea el banco entero.
pub fn generate_questions(topic: &str) -> Vec<Question> {
    let mut rng = rand::thread_rng();
    let seed: u64 = rng.r#gen();
    generate_questions_seeded(topic, seed)
}

pub fn generate_questions_seeded(topic: &str, seed: u64) -> Vec<Question> {
    let bank = read_bank_embedded();
    let wanted = topic.trim().to_lowercase();

    let mut pool: Vec<Question> = bank
        .iter()
        .filter(|b| !wanted.is_empty() && b.topic.to_lowercase() == wanted)
        .flat_map(|b| b.questions.clone())
        .collect();

    if pool.is_empty() {
        pool = bank.into_iter().flat_map(|b| b.questions).collect();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    pool.shuffle(&mut rng);
    pool.truncate(TOPIC_QUIZ_SIZE);
    pool
}

/// Parsea un banco de preguntas pegado o leído de un archivo (YAML).
pub fn parse_questions(text: &str) -> Result<Vec<Question>, serde_yaml::Error> {
    serde_yaml::from_str(text)
}

/// Lee un archivo de preguntas y devuelve (preguntas, nombre del archivo).
pub fn read_questions_from_path(
    path: &str,
) -> Result<(Vec<Question>, String), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let questions = parse_questions(&content)?;
    let file_name = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_owned();
    Ok((questions, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_quiz_respects_size_and_topic() {
        let questions = generate_questions_seeded("Historia", 7);
        assert_eq!(questions.len(), TOPIC_QUIZ_SIZE);
        // Todas las preguntas de Historia mencionan su respuesta en las opciones
        for q in &questions {
            assert!(q.options.contains(&q.correct_answer));
        }
    }

    #[test]
    fn unknown_topic_falls_back_to_whole_bank() {
        let questions = generate_questions_seeded("tema inexistente", 7);
        assert_eq!(questions.len(), TOPIC_QUIZ_SIZE);
    }

    #[test]
    fn same_seed_same_quiz() {
        let a = generate_questions_seeded("Ciencia", 42);
        let b = generate_questions_seeded("Ciencia", 42);
        assert_eq!(a, b);
    }

    #[test]
    fn parse_questions_accepts_bank_format() {
        let yaml = r#"
- question: "¿2+2?"
  options: ["3", "4"]
  correct_answer: "4"
  explanation: "Aritmética básica."
"#;
        let questions = parse_questions(yaml).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "4");
    }

    #[test]
    fn parse_questions_rejects_garbage() {
        assert!(parse_questions("esto: [no es, un banco").is_err());
    }
}
