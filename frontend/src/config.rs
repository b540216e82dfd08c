use gloo_console::warn;
use mapty_lib::config::AppConfig;

const EMBEDDED_CONFIG: &str = include_str!("../mapty.json");

pub fn load() -> AppConfig {
    match AppConfig::from_json(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            warn!(format!("{err}, falling back to defaults"));
            AppConfig::default()
        }
    }
}
