use crate::config::Config;
use crate::layout;
use crate::state::{ExtentHistory, MapViewport, ToolState, UiState};
use crate::style::Theme;
use eframe::egui;
use std::time::Duration;

pub struct Chizu {
    pub config: Config,
    pub viewport: MapViewport,
    pub history: ExtentHistory,
    pub tool: ToolState,
    pub ui: UiState,
    /// Width / height of the map canvas, updated every frame; targets
    /// of goTo jumps are fitted to it.
    pub canvas_aspect: f64,
}

impl Chizu {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let theme = Theme::from_mode(&config.theme.mode);
        theme.apply(&cc.egui_ctx);

        let mut ui = UiState::new(theme, config.ui.show_history_panel);
        let mut initial = config.initial_extent();
        if initial.width() <= 0.0 || initial.height() <= 0.0 {
            ui.set_error("Invalid [map] extent in config, using defaults".to_string());
            initial = Config::default().initial_extent();
        }
        let viewport = MapViewport::new(initial, config.ui.animation_ms);

        Self {
            config,
            viewport,
            history: ExtentHistory::new(),
            tool: ToolState::new(),
            ui,
            canvas_aspect: 1.0,
        }
    }

    pub fn navigate_back(&mut self) {
        match self.history.back() {
            Some(extent) => self.viewport.go_to(extent, self.canvas_aspect),
            // Buttons are disabled at the head of the log, but the
            // keyboard shortcut has no disabled state.
            None => self.ui.set_info("No earlier extent".to_string()),
        }
    }

    pub fn navigate_forward(&mut self) {
        match self.history.forward() {
            Some(extent) => self.viewport.go_to(extent, self.canvas_aspect),
            None => self.ui.set_info("No later extent".to_string()),
        }
    }

    /// Organic jump: it lands in the history like any user move.
    pub fn go_to_full_extent(&mut self) {
        let full = self.viewport.full_extent();
        self.viewport.go_to(full, self.canvas_aspect);
    }

    pub fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.ui.theme = self.ui.theme.toggle();
        self.ui.theme.apply(ctx);
        self.config.theme.mode = self.ui.theme.mode_str().to_string();
    }
}

impl eframe::App for Chizu {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.clear_expired_messages();
        self.handle_input(ctx);

        if self.viewport.tick() {
            ctx.request_repaint();
        }

        // The serialized stationary stream: one settle notification per
        // episode of motion feeds the history.
        if let Some(extent) = self.viewport.take_settled() {
            self.history.record_settled(extent);
        } else if self.viewport.settle_pending() {
            // Wake up again to catch the quiet-period expiry.
            ctx.request_repaint_after(Duration::from_millis(layout::STATIONARY_DELAY_MS));
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        if self.ui.show_history_panel {
            egui::SidePanel::right("history_panel")
                .resizable(true)
                .default_width(layout::HISTORY_PANEL_DEFAULT)
                .width_range(layout::HISTORY_PANEL_MIN..=layout::HISTORY_PANEL_MAX)
                .show(ctx, |ui| {
                    self.render_history_panel(ui);
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.render_map_canvas(ui);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.config.ui.show_history_panel = self.ui.show_history_panel;
        if let Err(e) = self.config.save() {
            eprintln!("Failed to save config: {}", e);
        }
    }
}
