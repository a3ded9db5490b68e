// Map canvas rendering and pointer interaction for Chizu
// Graticule drawing, drag-to-pan, wheel zoom, and the rubber band

use crate::app::Chizu;
use crate::layout;
use crate::model::{Point, Rect};
use crate::state::Tool;
use eframe::egui;

impl Chizu {
    pub(crate) fn render_map_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        if rect.width() < 1.0 || rect.height() < 1.0 {
            return;
        }

        self.canvas_aspect = (rect.width() / rect.height()) as f64;
        self.viewport.apply_aspect(self.canvas_aspect);

        if response.hovered() {
            ui.ctx().set_cursor_icon(self.tool.active.cursor_icon());
        }

        self.handle_pointer(ui.ctx(), &response, rect);

        painter.rect_filled(rect, 0.0, self.ui.theme.canvas_fill());
        self.paint_graticule(&painter, rect);
        self.paint_band(&painter, rect);
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, response: &egui::Response, rect: egui::Rect) {
        // Wheel zoom about the pointer, an organic move like any drag.
        if response.hovered() {
            let scroll = ctx.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                if let Some(pos) = response.hover_pos() {
                    let anchor = self.viewport.to_map(pos, rect);
                    let factor = layout::WHEEL_ZOOM_STEP.powf((scroll / 50.0) as f64);
                    self.viewport.zoom_about(anchor, factor);
                    ctx.request_repaint();
                }
            }
        }

        match self.tool.active {
            Tool::Pan => self.handle_pan_drag(response, rect),
            Tool::ZoomIn | Tool::ZoomOut => self.handle_band_drag(response, rect),
        }
    }

    fn handle_pan_drag(&mut self, response: &egui::Response, rect: egui::Rect) {
        if response.dragged() {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                let upp = self.viewport.units_per_pixel(rect);
                // Dragging right pulls the map right: the extent moves
                // the opposite way. Screen y grows downward.
                self.viewport
                    .pan_by(-(delta.x as f64) * upp, (delta.y as f64) * upp);
            }
        }
    }

    fn handle_band_drag(&mut self, response: &egui::Response, rect: egui::Rect) {
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.tool.begin_band(self.viewport.to_map(pos, rect));
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.tool.update_band(self.viewport.to_map(pos, rect));
            }
        }
        if response.drag_stopped() {
            match self.tool.finish_band() {
                Some(band) => self.apply_band(band),
                // The drag collapsed to a point: treat as a click.
                None => self.click_zoom(),
            }
        }
        // A click that never crossed the drag threshold.
        if response.clicked() {
            self.tool.cancel_band();
            self.click_zoom();
        }
    }

    fn apply_band(&mut self, band: Rect) {
        match self.tool.active {
            Tool::ZoomIn => self.viewport.zoom_to_rect(band, self.canvas_aspect),
            Tool::ZoomOut => self.viewport.zoom_out_by_rect(band, self.canvas_aspect),
            Tool::Pan => {}
        }
    }

    fn click_zoom(&mut self) {
        let factor = match self.tool.active {
            Tool::ZoomIn => layout::CLICK_ZOOM_IN,
            Tool::ZoomOut => layout::CLICK_ZOOM_OUT,
            Tool::Pan => return,
        };
        self.viewport.zoom_centered(factor, self.canvas_aspect);
    }

    fn paint_graticule(&self, painter: &egui::Painter, rect: egui::Rect) {
        let e = self.viewport.extent();
        if e.width() <= 0.0 || e.height() <= 0.0 {
            return;
        }
        let step = nice_step(e.width().min(e.height()) / layout::GRATICULE_TARGET_LINES);
        let stroke = egui::Stroke::new(1.0, self.ui.theme.graticule_stroke());
        let label_color = self.ui.theme.graticule_label();
        let font = egui::FontId::monospace(10.0);

        let mut x = (e.xmin / step).ceil() * step;
        while x <= e.xmax {
            let top = self.viewport.to_screen(Point::new(x, e.ymax), rect);
            let bottom = self.viewport.to_screen(Point::new(x, e.ymin), rect);
            painter.line_segment([top, bottom], stroke);
            painter.text(
                egui::pos2(top.x + 2.0, rect.bottom() - 2.0),
                egui::Align2::LEFT_BOTTOM,
                fmt_tick(x, step),
                font.clone(),
                label_color,
            );
            x += step;
        }

        let mut y = (e.ymin / step).ceil() * step;
        while y <= e.ymax {
            let left = self.viewport.to_screen(Point::new(e.xmin, y), rect);
            let right = self.viewport.to_screen(Point::new(e.xmax, y), rect);
            painter.line_segment([left, right], stroke);
            painter.text(
                egui::pos2(rect.left() + 2.0, left.y - 2.0),
                egui::Align2::LEFT_BOTTOM,
                fmt_tick(y, step),
                font.clone(),
                label_color,
            );
            y += step;
        }
    }

    fn paint_band(&self, painter: &egui::Painter, rect: egui::Rect) {
        let Some(band) = self.tool.band_rect() else {
            return;
        };
        let top_left = self.viewport.to_screen(Point::new(band.x, band.y), rect);
        let bottom_right = self
            .viewport
            .to_screen(Point::new(band.x + band.width, band.y - band.height), rect);
        let screen_rect = egui::Rect::from_two_pos(top_left, bottom_right);
        painter.rect_filled(screen_rect, 0.0, layout::BAND_FILL);
        painter.rect_stroke(
            screen_rect,
            0.0,
            egui::Stroke::new(layout::BAND_OUTLINE_WIDTH, layout::BAND_OUTLINE),
            egui::StrokeKind::Middle,
        );
    }
}

/// Rounds a raw interval to the nearest "nice" 1/2/5 × 10^n step.
pub(crate) fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual < 1.5 {
        1.0
    } else if residual < 3.5 {
        2.0
    } else if residual < 7.5 {
        5.0
    } else {
        10.0
    };
    factor * magnitude
}

/// Tick label with only as many decimals as the step needs.
fn fmt_tick(v: f64, step: f64) -> String {
    if step >= 1.0 {
        format!("{:.0}", v)
    } else {
        let decimals = (-step.log10().floor()) as usize;
        format!("{:.*}", decimals.min(6), v)
    }
}
