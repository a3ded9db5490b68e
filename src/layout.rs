// Layout constants for Chizu

use eframe::egui;

// --- Sizing ---
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 20.0;
pub const HISTORY_PANEL_MIN: f32 = 180.0;
pub const HISTORY_PANEL_DEFAULT: f32 = 260.0;
pub const HISTORY_PANEL_MAX: f32 = 420.0;

// --- Timing ---
/// Quiet period after the last motion before the view counts as
/// stationary and its extent is recorded.
pub const STATIONARY_DELAY_MS: u64 = 250;
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;

// --- Map canvas ---
/// Target number of graticule lines across the shorter canvas axis.
pub const GRATICULE_TARGET_LINES: f64 = 8.0;
/// Keyboard pan step as a fraction of the view width.
pub const KEY_PAN_FRACTION: f64 = 0.1;
/// Wheel zoom factor per scroll notch.
pub const WHEEL_ZOOM_STEP: f64 = 0.9;
/// Rubber band symbology, matching a classic zoom-box look.
pub const BAND_FILL: egui::Color32 = egui::Color32::from_rgba_premultiplied(0, 0, 0, 77);
pub const BAND_OUTLINE: egui::Color32 = egui::Color32::RED;
pub const BAND_OUTLINE_WIDTH: f32 = 1.0;

// --- Zoom factors ---
/// Plain click with the zoom-in tool: halve the view.
pub const CLICK_ZOOM_IN: f64 = 0.5;
/// Plain click with the zoom-out tool: double the view.
pub const CLICK_ZOOM_OUT: f64 = 2.0;
