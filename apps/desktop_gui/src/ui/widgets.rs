//! Stateless display primitives. They render what they are given and report
//! interaction through the returned `Response`; no state lives here.

use eframe::egui;

pub fn button(ui: &mut egui::Ui, label: impl Into<egui::RichText>, enabled: bool) -> egui::Response {
    let btn = egui::Button::new(label.into()).corner_radius(egui::CornerRadius::same(6));
    ui.add_enabled(enabled, btn)
}

pub fn text_input(
    ui: &mut egui::Ui,
    value: &mut String,
    hint: &str,
    desired_width: f32,
) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(desired_width),
    )
}

pub fn scroll_container<R>(
    ui: &mut egui::Ui,
    id_salt: &str,
    stick_to_bottom: bool,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::ScrollArea::vertical()
        .id_salt(id_salt)
        .auto_shrink([false, false])
        .stick_to_bottom(stick_to_bottom)
        .show(ui, add_contents)
        .inner
}
