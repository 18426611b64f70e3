mod app;
mod controller;
mod settings;
mod theme;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let native_options = eframe::NativeOptions {
        // The controller decides how to react to system theme changes.
        follow_system_theme: false,
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([320.0, 160.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Theme Toggle",
        native_options,
        Box::new(|cc| Box::new(app::ThemeToggleApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(())
}
