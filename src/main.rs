mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::HungerCompareApp;
use config::AppConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hunger Compare",
        options,
        Box::new(move |cc| Ok(Box::new(HungerCompareApp::new(cc, config)))),
    )
}
