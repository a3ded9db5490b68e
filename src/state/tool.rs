// Tool state - active navigation tool and rubber-band drag tracking
use crate::model::{rect_from_corners, Point, Rect};
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Pan,
    ZoomIn,
    ZoomOut,
}

impl Tool {
    /// The band tools draw with a crosshair; pan keeps the default
    /// pointer.
    pub fn cursor_icon(&self) -> egui::CursorIcon {
        match self {
            Tool::Pan => egui::CursorIcon::Default,
            Tool::ZoomIn | Tool::ZoomOut => egui::CursorIcon::Crosshair,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pan => "Pan",
            Tool::ZoomIn => "Zoom In",
            Tool::ZoomOut => "Zoom Out",
        }
    }
}

pub struct ToolState {
    pub active: Tool,
    /// Map-space anchor of an in-progress rubber-band drag.
    pub band_anchor: Option<Point>,
    /// Latest map-space pointer position while dragging a band.
    pub band_current: Option<Point>,
}

impl ToolState {
    pub fn new() -> Self {
        Self {
            active: Tool::Pan,
            band_anchor: None,
            band_current: None,
        }
    }

    /// Selecting a tool discards any half-drawn band. While a band tool
    /// is active the canvas routes drags into the band instead of
    /// panning.
    pub fn select(&mut self, tool: Tool) {
        self.active = tool;
        self.cancel_band();
    }

    pub fn begin_band(&mut self, at: Point) {
        self.band_anchor = Some(at);
        self.band_current = Some(at);
    }

    pub fn update_band(&mut self, at: Point) {
        if self.band_anchor.is_some() {
            self.band_current = Some(at);
        }
    }

    /// Finishes the drag and returns the normalized band rectangle.
    /// `None` means the gesture was a plain click.
    pub fn finish_band(&mut self) -> Option<Rect> {
        let anchor = self.band_anchor.take();
        let current = self.band_current.take();
        rect_from_corners(anchor?, current?)
    }

    /// The band as drawn so far, for rendering.
    pub fn band_rect(&self) -> Option<Rect> {
        rect_from_corners(self.band_anchor?, self.band_current?)
    }

    pub fn cancel_band(&mut self) {
        self.band_anchor = None;
        self.band_current = None;
    }
}
