//! Window and panel geometry.

pub const WINDOW_TITLE: &str = "Virtual Civil Assistant";
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 760.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [720.0, 480.0];

pub const HEADER_HEIGHT: f32 = 48.0;
pub const COMPOSER_HEIGHT: f32 = 56.0;

/// Share of the content width given to the transcript; the rest lists documents.
pub const TRANSCRIPT_WIDTH_FRACTION: f32 = 0.75;

/// Widest a single chat bubble may grow, as a share of the transcript width.
pub const BUBBLE_MAX_WIDTH_FRACTION: f32 = 0.8;

pub const MESSAGE_SPACING: f32 = 12.0;
pub const DOCUMENT_SPACING: f32 = 12.0;
