use thiserror::Error;

use crate::{controller::ControllerState, form::FormField, workout::WorkoutId};

/// Message shown for every rejected form submission.
pub const INVALID_INPUT_MESSAGE: &str = "Inputs have to be positive numbers!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationErrorCode {
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl From<u16> for LocationErrorCode {
    fn from(code: u16) -> Self {
        match code {
            0 => LocationErrorCode::Unsupported,
            1 => LocationErrorCode::PermissionDenied,
            2 => LocationErrorCode::PositionUnavailable,
            3 => LocationErrorCode::Timeout,
            _ => LocationErrorCode::Unknown,
        }
    }
}

/// Failure reported by the location source. Codes 1-3 follow the browser
/// geolocation API, 0 means geolocation is not available at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not get your position (code {code}): {message}")]
pub struct LocationError {
    pub code: u16,
    pub message: String,
}

impl LocationError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn unsupported() -> Self {
        Self::new(0, "Geolocation is not supported by this browser")
    }

    pub fn kind(&self) -> LocationErrorCode {
        self.code.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field} is not a number")]
    NotANumber { field: FormField },

    #[error("{field} must be positive")]
    NotPositive { field: FormField },
}

impl InputError {
    pub fn field(&self) -> FormField {
        match *self {
            InputError::NotANumber { field } | InputError::NotPositive { field } => field,
        }
    }

    /// All input errors collapse into one user notification.
    pub fn user_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown workout type: {0}")]
pub struct UnknownWorkoutType(pub String);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid map configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("No workout with id {0}")]
    LookupMiss(WorkoutId),

    #[error("Event not accepted while {0:?}")]
    NotReady(ControllerState),
}
