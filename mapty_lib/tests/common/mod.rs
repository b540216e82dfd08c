#![allow(dead_code)]

use std::future::{ready, Future};

use chrono::{DateTime, Local, TimeZone};
use mapty_lib::{
    collaborators::{Clock, LocationSource, MapView, Notifier, ViewOptions, WorkoutSurface},
    config::{AppConfig, PopupConfig},
    error::LocationError,
    view::{PopupContent, WorkoutRow},
    Coordinate, WorkoutController, WorkoutType,
};

#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    SetView {
        center: Coordinate,
        zoom: f64,
        options: ViewOptions,
    },
    TileLayer(String),
    SubscribeClicks,
    Marker {
        at: Coordinate,
        popup: PopupContent,
    },
}

#[derive(Debug, Default)]
pub struct RecordingMap {
    pub calls: Vec<MapCall>,
}

impl RecordingMap {
    pub fn markers(&self) -> Vec<&MapCall> {
        self.calls.iter().filter(|c| matches!(c, MapCall::Marker { .. })).collect()
    }

    pub fn set_views(&self) -> Vec<&MapCall> {
        self.calls.iter().filter(|c| matches!(c, MapCall::SetView { .. })).collect()
    }
}

impl MapView for RecordingMap {
    fn set_view(&mut self, center: Coordinate, zoom: f64, options: ViewOptions) {
        self.calls.push(MapCall::SetView { center, zoom, options });
    }

    fn add_tile_layer(&mut self, url_template: &str, _attribution: &str) {
        self.calls.push(MapCall::TileLayer(url_template.to_owned()));
    }

    fn subscribe_clicks(&mut self) {
        self.calls.push(MapCall::SubscribeClicks);
    }

    fn add_marker(&mut self, at: Coordinate, popup: &PopupContent, _options: &PopupConfig) {
        self.calls.push(MapCall::Marker {
            at,
            popup: popup.clone(),
        });
    }
}

#[derive(Debug)]
pub struct FakeSurface {
    pub form_visible: bool,
    pub focus_requests: usize,
    pub clears: usize,
    pub cadence_visible: bool,
    pub elevation_visible: bool,
    /// Display order, newest first.
    pub rows: Vec<WorkoutRow>,
}

impl Default for FakeSurface {
    fn default() -> Self {
        Self {
            form_visible: false,
            focus_requests: 0,
            clears: 0,
            cadence_visible: true,
            elevation_visible: true,
            rows: Vec::new(),
        }
    }
}

impl WorkoutSurface for FakeSurface {
    fn show_form(&mut self) {
        self.form_visible = true;
    }

    fn hide_form(&mut self) {
        self.form_visible = false;
    }

    fn focus_distance(&mut self) {
        self.focus_requests += 1;
    }

    fn clear_form(&mut self) {
        self.clears += 1;
    }

    fn show_variant_field(&mut self, kind: WorkoutType) {
        self.cadence_visible = kind == WorkoutType::Running;
        self.elevation_visible = kind == WorkoutType::Cycling;
    }

    fn insert_row(&mut self, row: WorkoutRow) {
        self.rows.insert(0, row);
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

pub struct FakeLocation(pub Result<Coordinate, LocationError>);

impl LocationSource for FakeLocation {
    fn request_once(&self) -> impl Future<Output = Result<Coordinate, LocationError>> {
        ready(self.0.clone())
    }
}

pub type TestController = WorkoutController<RecordingMap, FakeSurface, RecordingNotifier, FixedClock>;

pub fn april_7() -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 4, 7, 7, 15, 0).unwrap()
}

pub fn controller() -> TestController {
    controller_with(AppConfig::default())
}

pub fn controller_with(config: AppConfig) -> TestController {
    WorkoutController::with_clock(
        config,
        RecordingMap::default(),
        FakeSurface::default(),
        RecordingNotifier::default(),
        FixedClock(april_7()),
    )
}

/// A controller that already has its map.
pub fn ready_controller() -> TestController {
    let mut controller = controller();
    controller
        .on_location(Ok(Coordinate::new(52.37, 4.89)))
        .unwrap();
    controller
}
