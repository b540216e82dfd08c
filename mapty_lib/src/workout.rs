use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::{coordinate::Coordinate, error::UnknownWorkoutType};

// Indexed by `Datelike::month0`
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Running,
    Cycling,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 2] = [WorkoutType::Running, WorkoutType::Cycling];

    /// Value used by the form selector and in CSS class names.
    pub fn tag(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }

    /// The variant whose metric row is hidden while this one is selected.
    pub fn other(&self) -> WorkoutType {
        match self {
            WorkoutType::Running => WorkoutType::Cycling,
            WorkoutType::Cycling => WorkoutType::Running,
        }
    }
}

impl FromStr for WorkoutType {
    type Err = UnknownWorkoutType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WorkoutType::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| UnknownWorkoutType(s.to_owned()))
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Opaque record identifier. Only ever compared for exact equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Last ten digits of the creation time in milliseconds, followed by the
    /// store sequence number so records made in the same millisecond differ.
    pub fn generate(created_at: &DateTime<Local>, sequence: usize) -> Self {
        let millis = created_at.timestamp_millis().rem_euclid(10_000_000_000);
        Self(format!("{millis:010}{sequence}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for WorkoutId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Variant data. The derived metric is computed by the constructors on
/// [`Workout`] and never touched again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutKind {
    Running {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_hour: f64,
    },
}

impl WorkoutKind {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }

    /// Pace for running, speed for cycling.
    pub fn derived_metric(&self) -> f64 {
        match *self {
            WorkoutKind::Running {
                pace_min_per_km, ..
            } => pace_min_per_km,
            WorkoutKind::Cycling {
                speed_km_per_hour,
                ..
            } => speed_km_per_hour,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Local>,
    coordinates: Coordinate,
    distance_km: f64,
    duration_min: f64,
    description: String,
    kind: WorkoutKind,
}

impl Workout {
    /// Positivity of distance and duration is checked by the form layer
    /// before this is called.
    pub fn running(
        id: WorkoutId,
        created_at: DateTime<Local>,
        coordinates: Coordinate,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        let kind = WorkoutKind::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };
        Self::new(id, created_at, coordinates, distance_km, duration_min, kind)
    }

    pub fn cycling(
        id: WorkoutId,
        created_at: DateTime<Local>,
        coordinates: Coordinate,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        let kind = WorkoutKind::Cycling {
            elevation_gain_m,
            speed_km_per_hour: distance_km / duration_min,
        };
        Self::new(id, created_at, coordinates, distance_km, duration_min, kind)
    }

    fn new(
        id: WorkoutId,
        created_at: DateTime<Local>,
        coordinates: Coordinate,
        distance_km: f64,
        duration_min: f64,
        kind: WorkoutKind,
    ) -> Self {
        let description = describe(kind.workout_type(), &created_at);
        Self {
            id,
            created_at,
            coordinates,
            distance_km,
            duration_min,
            description,
            kind,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Local> {
        &self.created_at
    }

    pub fn coordinates(&self) -> Coordinate {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.kind.workout_type()
    }
}

/// `<Variant> on <Month> <day>`, e.g. "Running on April 7".
pub fn describe(kind: WorkoutType, date: &DateTime<Local>) -> String {
    format!(
        "{} on {} {}",
        kind.display_name(),
        MONTHS[date.month0() as usize],
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn april_7() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 4, 7, 9, 30, 0).unwrap()
    }

    #[test]
    fn running_computes_pace() {
        let run = Workout::running(
            WorkoutId::from("1"),
            april_7(),
            Coordinate::new(51.5, -0.12),
            5.0,
            24.0,
            180.0,
        );
        match run.kind() {
            WorkoutKind::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                assert_eq!(*cadence_spm, 180.0);
                assert!((pace_min_per_km - 4.8).abs() < 1e-9);
            }
            other => panic!("expected running, got {other:?}"),
        }
        assert_eq!(run.workout_type(), WorkoutType::Running);
    }

    #[test]
    fn cycling_computes_speed() {
        let ride = Workout::cycling(
            WorkoutId::from("2"),
            april_7(),
            Coordinate::new(46.0, 7.5),
            27.0,
            95.0,
            523.0,
        );
        assert!((ride.kind().derived_metric() - 27.0 / 95.0).abs() < 1e-12);
        assert_eq!(ride.description(), "Cycling on April 7");
    }

    #[test]
    fn description_uses_creation_month_and_day() {
        assert_eq!(describe(WorkoutType::Running, &april_7()), "Running on April 7");

        let new_year = Local.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(describe(WorkoutType::Cycling, &new_year), "Cycling on January 1");

        let last = Local.with_ymd_and_hms(2026, 12, 31, 23, 0, 0).unwrap();
        assert_eq!(describe(WorkoutType::Running, &last), "Running on December 31");
    }

    #[test]
    fn ids_differ_within_same_millisecond() {
        let at = april_7();
        let first = WorkoutId::generate(&at, 0);
        let second = WorkoutId::generate(&at, 1);
        assert_ne!(first, second);
        assert!(first.as_str().starts_with(&second.as_str()[..10]));
    }

    #[test]
    fn workout_type_parses_selector_values() {
        assert_eq!("running".parse::<WorkoutType>().unwrap(), WorkoutType::Running);
        assert_eq!("cycling".parse::<WorkoutType>().unwrap(), WorkoutType::Cycling);
        assert!("swimming".parse::<WorkoutType>().is_err());
        assert_eq!(WorkoutType::Running.other(), WorkoutType::Cycling);
    }
}
