mod app;
mod config;
mod domain;
mod infra;
mod platform;
mod ui;
mod usecase;


use log::warn;

use crate::config::{default_webview_data_dir, AppConfig};

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_filter.as_str()),
    )
    .init();
    if let Some(err) = config_error {
        warn!("falling back to default config: {err:#}");
    }

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Employees"))
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(app::App);
}
