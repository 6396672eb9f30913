use quiz_builder::QuizApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Dynamic Quiz Builder",
        options,
        Box::new(|cc| {
            // Restaura la sesión guardada por eframe si existe
            let app = cc
                .storage
                .and_then(|s| eframe::get_value::<QuizApp>(s, eframe::APP_KEY))
                .unwrap_or_else(QuizApp::new);
            Ok(Box::new(app))
        }),
    )
}
