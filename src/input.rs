// Input handling for Chizu
// Keyboard shortcuts for tools, panning, zoom, and history navigation

use crate::app::Chizu;
use crate::layout;
use crate::state::Tool;
use eframe::egui;

impl Chizu {
    pub fn handle_input(&mut self, ctx: &egui::Context) {
        // Escape drops any half-drawn band and returns to panning.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.tool.select(Tool::Pan);
            return;
        }

        // History navigation.
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft)) {
            self.navigate_back();
            return;
        }
        if ctx.input(|i| i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight)) {
            self.navigate_forward();
            return;
        }

        // Tool selection.
        if ctx.input(|i| i.key_pressed(egui::Key::P)) {
            self.tool.select(Tool::Pan);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Z) && !i.modifiers.shift) {
            self.tool.select(Tool::ZoomIn);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Z) && i.modifiers.shift) {
            self.tool.select(Tool::ZoomOut);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F)) {
            self.go_to_full_extent();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::H)) {
            self.ui.show_history_panel = !self.ui.show_history_panel;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::T)) {
            self.toggle_theme(ctx);
        }

        // Centered zoom.
        if ctx.input(|i| i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals)) {
            self.viewport
                .zoom_centered(layout::CLICK_ZOOM_IN, self.canvas_aspect);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Minus)) {
            self.viewport
                .zoom_centered(layout::CLICK_ZOOM_OUT, self.canvas_aspect);
        }

        // Arrow-key panning. Band drawing takes pointer input only, so
        // the arrows always pan regardless of the active tool.
        let extent = self.viewport.extent();
        let step_x = extent.width() * layout::KEY_PAN_FRACTION;
        let step_y = extent.height() * layout::KEY_PAN_FRACTION;
        if ctx.input(|i| !i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft)) {
            self.viewport.pan_by(-step_x, 0.0);
        }
        if ctx.input(|i| !i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight)) {
            self.viewport.pan_by(step_x, 0.0);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
            self.viewport.pan_by(0.0, step_y);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
            self.viewport.pan_by(0.0, -step_y);
        }
    }
}
