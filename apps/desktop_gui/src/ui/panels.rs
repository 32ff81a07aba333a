//! Panel renderers. Each takes an immutable snapshot of controller state and
//! reports what the user asked for; the app shell turns that into transitions.

use eframe::egui;
use shared::{domain::ChatMessage, protocol::DocumentRecord};

use crate::ui::{
    layout::{BUBBLE_MAX_WIDTH_FRACTION, DOCUMENT_SPACING, MESSAGE_SPACING},
    theme::{self, bubble_style},
    widgets,
};

const COMPOSER_HINT: &str = "Ask a question about civil engineering...";
const SEND_BUTTON_WIDTH: f32 = 96.0;

/// Title bar with the upload affordance. Returns true when upload was clicked.
pub fn show_header(ui: &mut egui::Ui, title: &str, pending: bool) -> bool {
    let mut upload_clicked = false;
    ui.horizontal_centered(|ui| {
        ui.label(
            egui::RichText::new(title)
                .color(egui::Color32::WHITE)
                .size(18.0)
                .strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = egui::RichText::new("⬆ Upload PDF").color(theme::BLUE_500);
            upload_clicked = widgets::button(ui, label, !pending).clicked();
        });
    });
    upload_clicked
}

pub fn show_transcript(ui: &mut egui::Ui, messages: &[ChatMessage]) {
    let bubble_max_width = ui.available_width() * BUBBLE_MAX_WIDTH_FRACTION;
    widgets::scroll_container(ui, "transcript", true, |ui| {
        for message in messages {
            message_bubble(ui, message, bubble_max_width);
            ui.add_space(MESSAGE_SPACING);
        }
    });
}

fn message_bubble(ui: &mut egui::Ui, message: &ChatMessage, max_width: f32) {
    let style = bubble_style(message.sender);
    let layout = if style.align_right {
        egui::Layout::right_to_left(egui::Align::TOP)
    } else {
        egui::Layout::left_to_right(egui::Align::TOP)
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::new()
            .fill(style.fill)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.set_max_width(max_width);
                    ui.add(
                        egui::Label::new(egui::RichText::new(&message.text).color(style.text))
                            .wrap(),
                    );
                });
            });
    });
}

/// Processed-document sidebar. The two icons are decorative.
pub fn show_documents(ui: &mut egui::Ui, documents: &[DocumentRecord]) {
    ui.label(egui::RichText::new("Processed PDFs").strong());
    ui.add_space(8.0);
    widgets::scroll_container(ui, "documents", false, |ui| {
        for document in documents {
            egui::Frame::new()
                .fill(theme::GRAY_100)
                .corner_radius(4.0)
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(egui::RichText::new(&document.filename).strong());
                    ui.horizontal(|ui| {
                        ui.label("📄").on_hover_text("Extracted text");
                        ui.label("🗄").on_hover_text("Extracted entities");
                    });
                });
            ui.add_space(DOCUMENT_SPACING);
        }
    });
}

/// Question input plus send button. Returns true when the user submitted,
/// either by clicking or by pressing Enter in the input.
pub fn show_composer(ui: &mut egui::Ui, input: &mut String, pending: bool) -> bool {
    let mut submitted = false;
    ui.horizontal_centered(|ui| {
        let input_width = (ui.available_width() - SEND_BUTTON_WIDTH).max(0.0);
        let response = widgets::text_input(ui, input, COMPOSER_HINT, input_width);
        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submitted = true;
            response.request_focus();
        }

        let label = if pending { "Sending..." } else { "Send ➤" };
        if widgets::button(ui, label, !pending).clicked() {
            submitted = true;
        }
    });
    submitted
}

pub fn show_status(ui: &mut egui::Ui, status: &str) {
    if !status.is_empty() {
        ui.small(egui::RichText::new(status).weak());
    }
}
