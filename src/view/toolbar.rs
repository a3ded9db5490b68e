// Toolbar rendering for Chizu
// Tool selection, full extent, and history navigation buttons

use crate::app::Chizu;
use crate::state::Tool;
use eframe::egui;

impl Chizu {
    pub(crate) fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.style_mut().spacing.button_padding = egui::vec2(8.0, 4.0);

            self.tool_button(ui, Tool::Pan, "🖐 Pan");
            self.tool_button(ui, Tool::ZoomIn, "🔍+ Zoom In");
            self.tool_button(ui, Tool::ZoomOut, "🔍− Zoom Out");

            ui.separator();

            if ui
                .button("⛶ Full Extent")
                .on_hover_text("Return to the initial view")
                .clicked()
            {
                self.go_to_full_extent();
            }

            ui.separator();

            let back = ui
                .add_enabled(self.history.can_go_back(), egui::Button::new("◀ Back"))
                .on_hover_text("Previous extent (Alt+←)");
            if back.clicked() {
                self.navigate_back();
            }

            let forward = ui
                .add_enabled(self.history.can_go_forward(), egui::Button::new("▶ Forward"))
                .on_hover_text("Next extent (Alt+→)");
            if forward.clicked() {
                self.navigate_forward();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button("🌓")
                    .on_hover_text("Toggle light/dark theme")
                    .clicked()
                {
                    self.toggle_theme(ui.ctx());
                }
                if ui
                    .selectable_label(self.ui.show_history_panel, "🕓 History")
                    .on_hover_text("Toggle the history panel")
                    .clicked()
                {
                    self.ui.show_history_panel = !self.ui.show_history_panel;
                }
            });
        });
        ui.add_space(4.0);
    }

    fn tool_button(&mut self, ui: &mut egui::Ui, tool: Tool, label: &str) {
        let selected = self.tool.active == tool;
        if ui
            .selectable_label(selected, label)
            .on_hover_text(tool.label())
            .clicked()
            && !selected
        {
            self.tool.select(tool);
        }
    }

    pub(crate) fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(self.tool.active.label());
            ui.separator();

            let e = self.viewport.extent();
            ui.label(format!(
                "{} .. {}  |  {} .. {}  (EPSG:{})",
                fmt_coord(e.xmin),
                fmt_coord(e.xmax),
                fmt_coord(e.ymin),
                fmt_coord(e.ymax),
                e.spatial_ref.0
            ));
            ui.separator();

            match self.history.cursor() {
                Some(idx) => ui.label(format!("History {}/{}", idx + 1, self.history.len())),
                None => ui.label("History –"),
            };

            if let Some((msg, _)) = &self.ui.error_message {
                ui.separator();
                ui.colored_label(egui::Color32::RED, msg);
            } else if let Some((msg, _)) = &self.ui.info_message {
                ui.separator();
                ui.colored_label(egui::Color32::from_rgb(120, 180, 255), msg);
            }
        });
    }
}

/// Compact coordinate formatting for the status bar: whole units for
/// projected coordinates, a few decimals for geographic ones.
pub(crate) fn fmt_coord(v: f64) -> String {
    if v.abs() >= 10_000.0 {
        format!("{:.0}", v)
    } else {
        format!("{:.3}", v)
    }
}
