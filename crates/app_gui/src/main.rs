mod app;

use app::UiApp;
use cataract_core::AppConfig;
use directories_next::ProjectDirs;
use eframe::{NativeOptions, egui};

fn main() {
    tracing_subscriber::fmt::init();
    let config = load_config();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("CataractEye")
            .with_inner_size([1100.0, 820.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };
    if let Err(e) = eframe::run_native(
        "CataractEye",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok::<_, Box<dyn std::error::Error + Send + Sync>>(Box::new(UiApp::new(config)))
        }),
    ) {
        tracing::error!("Application stopped with error: {e}");
    }
}

/// `config.toml` in the platform config directory, e.g.
/// `~/.config/CataractEye/config.toml` on Linux.
fn load_config() -> AppConfig {
    match ProjectDirs::from("com", "CataractEye", "CataractEye") {
        Some(dirs) => AppConfig::load_or_default(dirs.config_dir().join("config.toml")),
        None => {
            tracing::warn!("No home directory found, using default settings");
            AppConfig::default()
        }
    }
}
