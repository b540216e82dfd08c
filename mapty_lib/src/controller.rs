//! The workout logging flow.
//!
//! ```text
//! Idle --location--> MapReady --map click--> AwaitingInput --submit/cancel--> MapReady
//! ```
//!
//! Every handler runs to completion on one event. The pending click lives in
//! [`ControllerState::AwaitingInput`], so there is never more than one and a
//! newer click simply replaces it.

use tracing::{debug, info, warn};

use crate::{
    collaborators::{Clock, LocationSource, MapView, Notifier, SystemClock, ViewOptions, WorkoutSurface},
    config::AppConfig,
    coordinate::Coordinate,
    error::{ControllerError, LocationError},
    form::FormInput,
    store::WorkoutStore,
    view::{PopupContent, WorkoutRow},
    workout::{WorkoutId, WorkoutType},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerState {
    /// No position yet, or the position request failed.
    Idle,
    MapReady,
    AwaitingInput { pending: Coordinate },
}

pub struct WorkoutController<M, S, N, C = SystemClock> {
    config: AppConfig,
    state: ControllerState,
    store: WorkoutStore,
    map: M,
    surface: S,
    notifier: N,
    clock: C,
}

impl<M, S, N> WorkoutController<M, S, N, SystemClock>
where
    M: MapView,
    S: WorkoutSurface,
    N: Notifier,
{
    pub fn new(config: AppConfig, map: M, surface: S, notifier: N) -> Self {
        Self::with_clock(config, map, surface, notifier, SystemClock)
    }
}

impl<M, S, N, C> WorkoutController<M, S, N, C>
where
    M: MapView,
    S: WorkoutSurface,
    N: Notifier,
    C: Clock,
{
    pub fn with_clock(config: AppConfig, map: M, mut surface: S, notifier: N, clock: C) -> Self {
        surface.show_variant_field(config.form.variant_on_load);
        Self {
            config,
            state: ControllerState::Idle,
            store: WorkoutStore::new(),
            map,
            surface,
            notifier,
            clock,
        }
    }

    /// Request the position and handle the answer.
    pub async fn start<L: LocationSource>(&mut self, source: &L) -> Result<(), ControllerError> {
        let position = source.request_once().await;
        self.on_location(position)
    }

    pub fn on_location(&mut self, position: Result<Coordinate, LocationError>) -> Result<(), ControllerError> {
        if self.state != ControllerState::Idle {
            warn!(state = ?self.state, "Position arrived after the map was set up");
            return Err(ControllerError::NotReady(self.state));
        }

        match position {
            Ok(center) => {
                let map_config = &self.config.map;
                self.map.set_view(center, map_config.zoom, ViewOptions::instant());
                self.map.add_tile_layer(&map_config.tile_url, &map_config.attribution);
                self.map.subscribe_clicks();
                self.state = ControllerState::MapReady;
                info!(lat = center.latitude, lng = center.longitude, "Map ready");
                Ok(())
            }
            Err(err) => {
                warn!(code = err.code, kind = ?err.kind(), message = %err.message, "Position unavailable");
                self.notifier.alert(&err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn on_map_click(&mut self, at: Coordinate) -> Result<(), ControllerError> {
        if self.state == ControllerState::Idle {
            debug!("Ignoring map click before the map is ready");
            return Err(ControllerError::NotReady(self.state));
        }

        if let ControllerState::AwaitingInput { pending } = self.state {
            debug!(%pending, "Replacing pending click");
        }
        self.state = ControllerState::AwaitingInput { pending: at };
        self.surface.show_form();
        self.surface.focus_distance();
        Ok(())
    }

    pub fn on_type_change(&mut self, kind: WorkoutType) {
        self.surface.show_variant_field(kind);
    }

    /// Validate the form and log a workout at the pending click.
    ///
    /// Invalid input raises one notification and leaves everything as it
    /// was, form and pending click included.
    pub fn on_submit(&mut self, input: &FormInput) -> Result<WorkoutId, ControllerError> {
        let ControllerState::AwaitingInput { pending } = self.state else {
            return Err(ControllerError::NotReady(self.state));
        };

        let draft = match input.parse(self.config.form.elevation_rule) {
            Ok(draft) => draft,
            Err(err) => {
                info!(field = %err.field(), "Rejected workout input: {err}");
                self.notifier.alert(err.user_message());
                return Err(err.into());
            }
        };

        let created_at = self.clock.now();
        let id = WorkoutId::generate(&created_at, self.store.len());
        let workout = draft.into_workout(id.clone(), created_at, pending);

        self.map.add_marker(pending, &PopupContent::from(&workout), &self.config.popup);
        self.surface.insert_row(WorkoutRow::from(&workout));
        info!(
            %id,
            kind = %workout.workout_type(),
            lat = pending.latitude,
            lng = pending.longitude,
            "Logged workout"
        );
        self.store.append(workout);

        self.close_form();
        Ok(id)
    }

    /// Drop the pending click without logging anything.
    pub fn cancel_input(&mut self) {
        if let ControllerState::AwaitingInput { .. } = self.state {
            self.close_form();
        }
    }

    /// Pan the map to a logged workout.
    pub fn on_row_click(&mut self, id: &WorkoutId) -> Result<Coordinate, ControllerError> {
        let Some(workout) = self.store.find_by_id(id) else {
            debug!(%id, "No workout for clicked row");
            return Err(ControllerError::LookupMiss(id.clone()));
        };

        let at = workout.coordinates();
        let map_config = &self.config.map;
        self.map.set_view(at, map_config.zoom, ViewOptions::animated(map_config.pan_duration_secs));
        Ok(at)
    }

    fn close_form(&mut self) {
        self.surface.clear_form();
        self.surface.hide_form();
        self.state = ControllerState::MapReady;
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn pending_click(&self) -> Option<Coordinate> {
        match self.state {
            ControllerState::AwaitingInput { pending } => Some(pending),
            _ => None,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
