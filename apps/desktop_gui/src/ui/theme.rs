use eframe::egui;
use shared::domain::Sender;

// Tailwind-ish light palette.
pub const BLUE_500: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
pub const BLUE_100: egui::Color32 = egui::Color32::from_rgb(219, 234, 254);
pub const BLUE_900: egui::Color32 = egui::Color32::from_rgb(30, 58, 138);
pub const GREEN_100: egui::Color32 = egui::Color32::from_rgb(220, 252, 231);
pub const GREEN_900: egui::Color32 = egui::Color32::from_rgb(20, 83, 45);
pub const GRAY_100: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
pub const GRAY_900: egui::Color32 = egui::Color32::from_rgb(17, 24, 39);
pub const BORDER: egui::Color32 = egui::Color32::from_rgb(229, 231, 235);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleStyle {
    pub fill: egui::Color32,
    pub text: egui::Color32,
    pub align_right: bool,
}

/// User turns sit on the right in blue; system notices are green and bot
/// answers gray, both on the left.
pub fn bubble_style(sender: Sender) -> BubbleStyle {
    match sender {
        Sender::User => BubbleStyle {
            fill: BLUE_100,
            text: BLUE_900,
            align_right: true,
        },
        Sender::System => BubbleStyle {
            fill: GREEN_100,
            text: GREEN_900,
            align_right: false,
        },
        Sender::Bot => BubbleStyle {
            fill: GRAY_100,
            text: GRAY_900,
            align_right: false,
        },
    }
}

pub fn visuals() -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.selection.bg_fill = BLUE_500;
    visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, BORDER);
    visuals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_sender_has_distinct_fill() {
        let fills = [Sender::User, Sender::Bot, Sender::System].map(|s| bubble_style(s).fill);
        assert_ne!(fills[0], fills[1]);
        assert_ne!(fills[1], fills[2]);
        assert_ne!(fills[0], fills[2]);
    }

    #[test]
    fn only_user_messages_align_right() {
        assert!(bubble_style(Sender::User).align_right);
        assert!(!bubble_style(Sender::Bot).align_right);
        assert!(!bubble_style(Sender::System).align_right);
    }
}
