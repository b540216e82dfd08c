pub mod collaborators;
pub mod config;
pub mod controller;
pub mod coordinate;
pub mod error;
pub mod form;
pub mod store;
pub mod view;
pub mod workout;

pub use controller::{ControllerState, WorkoutController};
pub use coordinate::Coordinate;
pub use workout::{Workout, WorkoutId, WorkoutKind, WorkoutType};
