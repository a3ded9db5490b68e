// History panel rendering for Chizu
// Table of recorded extents with the cursor row highlighted

use crate::app::Chizu;
use crate::layout;
use crate::style;
use crate::view::toolbar::fmt_coord;
use eframe::egui;

impl Chizu {
    pub(crate) fn render_history_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.heading("History");
        });
        ui.separator();

        if self.history.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No extents recorded yet");
            });
            return;
        }

        let cursor = self.history.cursor();

        egui::ScrollArea::vertical()
            .id_salt("history_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                use egui_extras::{Column, TableBuilder};
                let mut table = TableBuilder::new(ui)
                    .striped(true)
                    .resizable(false)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::auto().at_least(24.0))
                    .column(Column::remainder().clip(true))
                    .column(Column::auto().at_least(60.0));

                if let Some(idx) = cursor {
                    table = table.scroll_to_row(idx, None);
                }

                table
                    .header(layout::HEADER_HEIGHT, |mut header| {
                        header.col(|ui| {
                            ui.label("#");
                        });
                        header.col(|ui| {
                            ui.label("Extent");
                        });
                        header.col(|ui| {
                            ui.label("Time");
                        });
                    })
                    .body(|body| {
                        body.rows(layout::ROW_HEIGHT, self.history.len(), |mut row| {
                            let idx = row.index();
                            let entry = &self.history.entries()[idx];
                            row.set_selected(cursor == Some(idx));

                            row.col(|ui| {
                                ui.label(format!("{}", idx + 1));
                            });
                            row.col(|ui| {
                                let center = entry.extent.center();
                                style::truncated_label(
                                    ui,
                                    format!(
                                        "{}, {} · {} wide",
                                        fmt_coord(center.x),
                                        fmt_coord(center.y),
                                        fmt_coord(entry.extent.width())
                                    ),
                                );
                            });
                            row.col(|ui| {
                                ui.label(entry.recorded_at.format("%H:%M:%S").to_string());
                            });
                        });
                    });
            });
    }
}
