mod app;
mod config;
mod input;
mod layout;
mod model;
mod state;
mod style;
mod view;

use app::Chizu;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result<()> {
    if let Err(e) = Config::create_default() {
        eprintln!("Could not create default config: {}", e);
    }
    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([640.0, 400.0])
            .with_title("Chizu"),
        ..Default::default()
    };

    eframe::run_native(
        "Chizu",
        options,
        Box::new(|cc| Ok(Box::new(Chizu::new(cc, config)))),
    )
}
