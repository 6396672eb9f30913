mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Sin login no se renderiza ninguna otra pantalla
        if !self.is_logged_in {
            views::auth::ui_auth(self, ctx);
            return;
        }

        // BARRA SUPERIOR (volver al panel / cerrar sesión) fuera del panel
        if !matches!(self.state, AppState::Auth | AppState::Dashboard) {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las funciones de views/. Las ramas con guarda
        // fallida (p. ej. resultados sin resultado activo) caen al panel.
        match self.state {
            AppState::Upload => views::upload::ui_upload(self, ctx),
            AppState::QuizSetup if self.quiz_initial_data.is_some() => {
                views::quiz_setup::ui_quiz_setup(self, ctx)
            }
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Results if self.active_result.is_some() => {
                views::results::ui_results(self, ctx)
            }
            AppState::ReviewLive if self.active_result.is_some() => {
                views::review_live::ui_review_live(self, ctx)
            }
            AppState::ReviewHistory => views::review_history::ui_review_history(self, ctx),
            _ => views::dashboard::ui_dashboard(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
