mod app;
mod config;
mod models;
mod providers;
mod services;
mod ui;

use relm4::prelude::*;
use tracing_subscriber::EnvFilter;

use app::App;
use config::APP_ID;
use services::{AppSettings, SettingsService};

const STYLE: &str = include_str!("../data/style.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = match SettingsService::load() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Ignoring settings: {:#}", e);
            AppSettings::default()
        }
    };
    tracing::debug!(?settings, "Loaded settings");

    let app = adw::Application::builder().application_id(APP_ID).build();

    let relm = RelmApp::from_app(app);
    relm.set_global_css(STYLE);
    relm.run_async::<App>(settings);
}
