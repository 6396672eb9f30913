use super::*;

const UNASSIGNED_SUBJECT: &str = "Sin asignatura";

impl QuizApp {
    /// Métricas agregadas sobre el historial cargado.
    pub fn dashboard_metrics(&self) -> DashboardMetrics {
        let mut metrics = DashboardMetrics::default();
        // Acumuladores por asignatura, en orden de aparición
        let mut subjects: Vec<SubjectPerformance> = Vec::new();

        for result in &self.history {
            let total = result.questions.len();
            metrics.total_quizzes += 1;
            metrics.total_questions += total;
            metrics.total_correct += result.score;
            metrics.total_incorrect += total.saturating_sub(result.score);

            let subject = if result.subject.trim().is_empty() {
                UNASSIGNED_SUBJECT
            } else {
                result.subject.trim()
            };
            match subjects.iter_mut().find(|s| s.subject == subject) {
                Some(entry) => {
                    entry.correct += result.score;
                    entry.total += total;
                }
                None => subjects.push(SubjectPerformance {
                    subject: subject.to_owned(),
                    correct: result.score,
                    total,
                    percentage: 0.0,
                }),
            }
        }

        for entry in &mut subjects {
            entry.percentage = percentage(entry.correct, entry.total);
        }
        metrics.overall_percentage = percentage(metrics.total_correct, metrics.total_questions);
        metrics.subject_performance = subjects;
        metrics
    }

    /// Filas del historial, de la más reciente a la más antigua.
    pub fn history_rows(&self) -> Vec<HistoryRow> {
        self.history
            .iter()
            .rev()
            .map(|r| HistoryRow {
                id: r.id.clone(),
                quiz_name: r.quiz_name.clone(),
                subject: r.subject.clone(),
                score: r.score,
                total: r.questions.len(),
                date_label: r.date.format("%d/%m/%Y %H:%M").to_string(),
            })
            .collect()
    }
}

fn percentage(correct: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        correct as f32 * 100.0 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuizResult};
    use crate::storage::QuizStorage;
    use chrono::Utc;
    use tempfile::TempDir;

    fn result(subject: &str, score: usize, total: usize, id: &str) -> QuizResult {
        let question = Question {
            question: "¿?".into(),
            options: vec!["A".into(), "B".into()],
            correct_answer: "A".into(),
            explanation: String::new(),
        };
        QuizResult {
            id: id.into(),
            topic: "tema".into(),
            quiz_name: format!("Quiz {id}"),
            subject: subject.into(),
            chapter: String::new(),
            questions: vec![question; total],
            user_answers: vec![None; total],
            confidence_levels: vec![None; total],
            score,
            time_taken_seconds: 60,
            date: Utc::now(),
        }
    }

    fn app_with_history(history: Vec<QuizResult>) -> (QuizApp, TempDir) {
        let tmp = TempDir::new().unwrap();
        let mut app =
            QuizApp::with_storage(QuizStorage::with_path(tmp.path().join("results.yaml")));
        app.history = history;
        (app, tmp)
    }

    #[test]
    fn metrics_aggregate_over_history() {
        let (app, _tmp) = app_with_history(vec![
            result("Historia", 3, 5, "1"),
            result("Historia", 4, 5, "2"),
            result("Ciencia", 2, 4, "3"),
        ]);

        let m = app.dashboard_metrics();
        assert_eq!(m.total_quizzes, 3);
        assert_eq!(m.total_questions, 14);
        assert_eq!(m.total_correct, 9);
        assert_eq!(m.total_incorrect, 5);
        assert!((m.overall_percentage - 9.0 * 100.0 / 14.0).abs() < 0.01);

        assert_eq!(m.subject_performance.len(), 2);
        let historia = &m.subject_performance[0];
        assert_eq!(historia.subject, "Historia");
        assert_eq!(historia.correct, 7);
        assert_eq!(historia.total, 10);
        assert!((historia.percentage - 70.0).abs() < 0.01);
    }

    #[test]
    fn empty_subject_groups_as_unassigned() {
        let (app, _tmp) = app_with_history(vec![result("", 1, 2, "1"), result("  ", 2, 2, "2")]);
        let m = app.dashboard_metrics();
        assert_eq!(m.subject_performance.len(), 1);
        assert_eq!(m.subject_performance[0].subject, UNASSIGNED_SUBJECT);
        assert_eq!(m.subject_performance[0].total, 4);
    }

    #[test]
    fn empty_history_has_zeroed_metrics() {
        let (app, _tmp) = app_with_history(vec![]);
        let m = app.dashboard_metrics();
        assert_eq!(m.total_quizzes, 0);
        assert_eq!(m.overall_percentage, 0.0);
        assert!(m.subject_performance.is_empty());
    }

    #[test]
    fn history_rows_are_most_recent_first() {
        let (app, _tmp) = app_with_history(vec![
            result("Historia", 3, 5, "viejo"),
            result("Ciencia", 2, 4, "nuevo"),
        ]);
        let rows = app.history_rows();
        assert_eq!(rows[0].id, "nuevo");
        assert_eq!(rows[1].id, "viejo");
        assert!(rows[0].label().contains("Ciencia"));
    }
}
