//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for success notices, active flags and approved records.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for errors, failed fetches and rejected records.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for pending orders and records awaiting moderation.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Muted gray for secondary text such as timestamps.
pub const COLOR_MUTED: Color32 = Color32::from_rgb(128, 128, 128);
