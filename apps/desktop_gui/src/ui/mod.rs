//! UI layer for desktop GUI: app shell, panels, primitives, theme, and layout constants.

pub mod app;
pub mod layout;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::DesktopGuiApp;
