// src/view_models.rs

/// Rendimiento acumulado de una asignatura en el historial.
#[derive(Clone, Debug, PartialEq)]
pub struct SubjectPerformance {
    pub subject: String,
    pub correct: usize,
    pub total: usize,
    pub percentage: f32,
}

/// Métricas agregadas del panel principal.
#[derive(Clone, Debug, Default)]
pub struct DashboardMetrics {
    pub total_quizzes: usize,
    pub total_questions: usize,
    pub total_correct: usize,
    pub total_incorrect: usize,
    pub overall_percentage: f32,
    pub subject_performance: Vec<SubjectPerformance>,
}

/// Fila del historial de quizzes.
#[derive(Clone, Debug)]
pub struct HistoryRow {
    pub id: String,
    pub quiz_name: String,
    pub subject: String,
    pub score: usize,
    pub total: usize,
    pub date_label: String,
}

impl HistoryRow {
    pub fn label(&self) -> String {
        if self.subject.is_empty() {
            format!("{} — {}/{}", self.quiz_name, self.score, self.total)
        } else {
            format!(
                "{} ({}) — {}/{}",
                self.quiz_name, self.subject, self.score, self.total
            )
        }
    }
}
