use crate::QuizApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, TextEdit};

pub fn ui_auth(app: &mut QuizApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("🎓 Dynamic Quiz Builder");
            ui.add_space(18.0);
            ui.label("Inicia sesión para continuar");
            ui.add_space(10.0);

            let field_w = (ui.available_width() * 0.9).clamp(160.0, 320.0);
            ui.add_sized(
                [field_w, 28.0],
                TextEdit::singleline(&mut app.username_input).hint_text("Usuario"),
            );
            ui.add_space(5.0);
            ui.add_sized(
                [field_w, 28.0],
                TextEdit::singleline(&mut app.password_input)
                    .password(true)
                    .hint_text("Contraseña"),
            );
            ui.add_space(14.0);

            // Login de demostración: cualquier credencial entra
            if ui
                .add_sized([field_w, 40.0], Button::new("Entrar"))
                .clicked()
            {
                app.login();
            }
        });
    });
}
