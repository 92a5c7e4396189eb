mod app;

use eframe::egui;

use gesture_demo::config::{usage, Command, DemoConfig};

use app::GestureDemoApp;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match DemoConfig::from_args(std::env::args().skip(1)) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print!("{}", usage());
            return Ok(());
        }
        Err(e) => {
            eprintln!("{}\n\n{}", e, usage());
            std::process::exit(2);
        }
    };

    log::info!("Starting with demo '{}'", config.demo);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([320.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Gesture Demo",
        options,
        Box::new(move |_cc| Ok(Box::new(GestureDemoApp::new(&config)))),
    )
}
