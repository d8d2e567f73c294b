// main.rs - Desktop front end for Conway's Game of Life
// Rendering and input live in ui.rs; the simulation is driven through conway::Controller

use eframe::egui;

use conway::{Config, Controller};

mod ui;

use ui::LifeApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    let controller = Controller::new(&config)?;
    let (width, height) = controller.display();

    log::info!("Starting Game of Life");
    log::info!("Display: {}x{}", width, height);
    log::info!("Grid: {:?}, {} fps", controller.grid().dimensions(), controller.state().tick_rate.per_second());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(controller))),
    )?;
    Ok(())
}

/// Load configuration from file or use default
fn load_config() -> Config {
    let paths = ["life.yaml", "config/life.yaml"];

    for path in paths {
        match Config::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from: {}", path);
                return config;
            }
            Err(conway::ConfigError::Io(_)) => {}
            Err(e) => log::warn!("Skipping {}: {}", path, e),
        }
    }

    log::info!("Using default configuration");
    Config::default()
}
