use super::*;

impl QuizApp {
    /// Login trivial: cualquier credencial vale, solo marca la sesión.
    pub fn login(&mut self) {
        self.is_logged_in = true;
        self.state = AppState::Dashboard;
        self.refresh_history();
        self.password_input.clear();
        self.message.clear();
    }

    pub fn cerrar_sesion(&mut self) {
        self.clear_session_data();
        self.is_logged_in = false;
        self.state = AppState::Auth;
        self.message.clear();
    }

    /// Quiz nuevo desde un tema: descartar la sesión pendiente señala que la
    /// pantalla de quiz debe sembrar una desde cero (sin `id`).
    pub fn generar_quiz(&mut self) {
        self.quiz_initial_data = None;
        self.state = AppState::Quiz;
        self.message.clear();
    }

    /// Reentra en el quiz en curso sin tocar la sesión (p. ej. una sesión
    /// restaurada tras un reinicio). Sin sesión retomable no hay transición.
    pub fn continuar_quiz(&mut self) {
        if !self.has_resumable_session() {
            return;
        }
        self.state = AppState::Quiz;
        self.message.clear();
    }

    pub fn crear_desde_archivo(&mut self) {
        self.state = AppState::Upload;
        self.message.clear();
    }

    pub fn ver_historial(&mut self) {
        self.refresh_history();
        self.state = AppState::ReviewHistory;
        self.message.clear();
    }

    /// Vuelta al panel: descarta a la vez el resultado activo, la sesión en
    /// curso y las preguntas generadas pendientes.
    pub fn volver_al_panel(&mut self) {
        self.clear_session_data();
        self.state = AppState::Dashboard;
        self.message.clear();
    }

    /// Revisión del resultado activo; sin resultado activo no hay transición.
    pub fn empezar_revision(&mut self) {
        if self.active_result.is_none() {
            return;
        }
        self.state = AppState::ReviewLive;
        self.message.clear();
    }

    /// Adopta un resultado del historial como resultado activo.
    pub fn revisar_historico(&mut self, result: QuizResult) {
        self.active_result = Some(result);
        self.state = AppState::Results;
        self.message.clear();
    }

    pub fn revisar_por_id(&mut self, id: &str) {
        let result = match self.history.iter().find(|r| r.id == id) {
            Some(r) => r.clone(),
            None => return,
        };
        self.revisar_historico(result);
    }
}
