mod app;
mod capture;
mod config;
mod domain;
mod error;
mod export;
mod history;
mod ocr;
mod session;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = config::AppConfig::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "textsnip",
        options,
        Box::new(move |cc| Box::new(app::TextsnipApp::new(cc, config))),
    )
}
