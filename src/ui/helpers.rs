// src/ui/helpers.rs
use egui::{Button, SelectableLabel, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Opción de respuesta a ancho fijo; marcada si es la selección actual.
pub fn option_button(ui: &mut Ui, label: &str, selected: bool, width: f32) -> bool {
    ui.add_sized([width, 32.0], SelectableLabel::new(selected, label))
        .clicked()
}
