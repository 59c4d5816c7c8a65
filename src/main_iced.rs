//! Extensions manager - iced UI entry point.
//!
//! Build with: cargo build --features iced-ui

use extensions_manager::ui::ExtensionsApp;
use extensions_manager::Config;
use iced::{window, Size};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load();
    log::info!("Using config from {}", Config::config_path().display());

    let window_settings = window::Settings {
        size: Size::new(
            config.appearance.window_width as f32,
            config.appearance.window_height as f32,
        ),
        min_size: Some(Size::new(480.0, 360.0)),
        position: window::Position::Centered,
        ..Default::default()
    };

    iced::application(ExtensionsApp::title, ExtensionsApp::update, ExtensionsApp::view)
        .subscription(ExtensionsApp::subscription)
        .theme(ExtensionsApp::theme)
        .window(window_settings)
        .run_with(move || ExtensionsApp::new(config))
}
