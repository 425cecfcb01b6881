mod ui;
mod utils;

use adw::prelude::*;
use adw::Application;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = Application::builder()
        .application_id("com.example.CareMarketGtk")
        .build();
    app.connect_activate(|app| {
        crate::ui::main_window::show_main_window(app);
    });
    app.run();
}
