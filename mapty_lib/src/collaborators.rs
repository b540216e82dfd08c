//! Seams to the outside world: the browser location service, the map
//! widget, the form and list presentation, user notifications and time.

use std::future::Future;

use chrono::{DateTime, Local};

use crate::{
    config::PopupConfig,
    coordinate::Coordinate,
    error::LocationError,
    view::{PopupContent, WorkoutRow},
    workout::WorkoutType,
};

/// One-shot position lookup. Resolves exactly once, success or failure.
pub trait LocationSource {
    fn request_once(&self) -> impl Future<Output = Result<Coordinate, LocationError>>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewOptions {
    pub animate: bool,
    pub pan_duration_secs: f64,
}

impl ViewOptions {
    pub fn instant() -> Self {
        Self {
            animate: false,
            pan_duration_secs: 0.0,
        }
    }

    pub fn animated(pan_duration_secs: f64) -> Self {
        Self {
            animate: true,
            pan_duration_secs,
        }
    }
}

pub trait MapView {
    fn set_view(&mut self, center: Coordinate, zoom: f64, options: ViewOptions);

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str);

    /// Start forwarding map clicks to the controller's `on_map_click`.
    fn subscribe_clicks(&mut self);

    fn add_marker(&mut self, at: Coordinate, popup: &PopupContent, options: &PopupConfig);
}

/// The workout form and the list of logged workouts.
pub trait WorkoutSurface {
    fn show_form(&mut self);

    fn hide_form(&mut self);

    fn focus_distance(&mut self);

    /// Empty all numeric inputs.
    fn clear_form(&mut self);

    /// Show the metric row belonging to `kind` and hide the other one.
    fn show_variant_field(&mut self, kind: WorkoutType);

    /// Insert a row directly below the form, above every earlier row.
    fn insert_row(&mut self, row: WorkoutRow);
}

/// Blocking user-facing message, `window.alert` in the browser.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
