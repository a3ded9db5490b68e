use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn mode_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn apply(&self, ctx: &egui::Context) {
        match self {
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }
    }

    /// Canvas background, slightly offset from the panel fill so the
    /// map area reads as a surface.
    pub fn canvas_fill(&self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_rgb(235, 240, 244),
            Theme::Dark => egui::Color32::from_rgb(24, 28, 33),
        }
    }

    pub fn graticule_stroke(&self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_gray(200),
            Theme::Dark => egui::Color32::from_gray(60),
        }
    }

    pub fn graticule_label(&self) -> egui::Color32 {
        match self {
            Theme::Light => egui::Color32::from_gray(120),
            Theme::Dark => egui::Color32::from_gray(140),
        }
    }
}

pub fn truncated_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        assert_eq!(Theme::from_mode("light"), Theme::Light);
        assert_eq!(Theme::from_mode("dark"), Theme::Dark);
        assert_eq!(Theme::from_mode("anything else"), Theme::Dark);
        assert_eq!(Theme::from_mode(Theme::Light.mode_str()), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }
}
