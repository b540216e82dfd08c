use serde::Deserialize;

use crate::{error::ConfigError, form::ElevationRule, workout::WorkoutType};

pub const DEFAULT_ZOOM: f64 = 13.0;
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub map: MapConfig,
    pub popup: PopupConfig,
    pub form: FormConfig,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Used both for the initial view and for recentring on a workout.
    pub zoom: f64,
    pub tile_url: String,
    pub attribution: String,
    pub pan_duration_secs: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            tile_url: DEFAULT_TILE_URL.to_owned(),
            attribution: DEFAULT_ATTRIBUTION.to_owned(),
            pan_duration_secs: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PopupConfig {
    pub max_width: f64,
    pub min_width: f64,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            max_width: 250.0,
            min_width: 100.0,
            auto_close: false,
            close_on_click: false,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub variant_on_load: WorkoutType,
    pub elevation_rule: ElevationRule,
}
