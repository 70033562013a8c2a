pub const APP_ID: &str = "pk.lifelink.LifeLink";
pub const APP_NAME: &str = "LifeLink";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Directory under the user config dir that holds `settings.json`.
pub const CONFIG_DIR_NAME: &str = "lifelink";
