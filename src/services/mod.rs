pub mod auth;
pub mod chat;
pub mod settings;

pub use settings::{AppSettings, SettingsService};
