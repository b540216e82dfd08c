//! Raw form values and their conversion into a validated draft.
//!
//! Numbers are read the way a browser number input reports them: surrounding
//! whitespace is ignored and an empty field counts as zero.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::{
    coordinate::Coordinate,
    error::InputError,
    workout::{Workout, WorkoutId, WorkoutType},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Distance,
        FormField::Duration,
        FormField::Cadence,
        FormField::Elevation,
    ];

    /// Workout type this field belongs to, for the variant-only fields.
    pub fn variant(&self) -> Option<WorkoutType> {
        match self {
            FormField::Cadence => Some(WorkoutType::Running),
            FormField::Elevation => Some(WorkoutType::Cycling),
            FormField::Distance | FormField::Duration => None,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormField::Distance => "distance",
            FormField::Duration => "duration",
            FormField::Cadence => "cadence",
            FormField::Elevation => "elevation",
        })
    }
}

/// Whether elevation gain has to pass a sign check in addition to being a
/// finite number. Browsers accept any finite elevation by default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevationRule {
    #[default]
    FiniteOnly,
    NonNegative,
    Positive,
}

impl ElevationRule {
    fn accepts(&self, elevation: f64) -> bool {
        match self {
            ElevationRule::FiniteOnly => true,
            ElevationRule::NonNegative => elevation >= 0.0,
            ElevationRule::Positive => elevation > 0.0,
        }
    }
}

/// Form contents exactly as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub workout_type: WorkoutType,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl FormInput {
    pub fn new(workout_type: WorkoutType) -> Self {
        Self {
            workout_type,
            ..Default::default()
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Distance => &self.distance,
            FormField::Duration => &self.duration,
            FormField::Cadence => &self.cadence,
            FormField::Elevation => &self.elevation,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Distance => &mut self.distance,
            FormField::Duration => &mut self.duration,
            FormField::Cadence => &mut self.cadence,
            FormField::Elevation => &mut self.elevation,
        };
        *slot = value.into();
    }

    /// Empties every numeric field. The selected type is kept.
    pub fn clear(&mut self) {
        for field in FormField::ALL {
            self.set(field, String::new());
        }
    }

    pub fn parse(&self, elevation_rule: ElevationRule) -> Result<WorkoutDraft, InputError> {
        let distance_km = parse_number(FormField::Distance, &self.distance)?;
        let duration_min = parse_number(FormField::Duration, &self.duration)?;

        let metric = match self.workout_type {
            WorkoutType::Running => {
                VariantMetric::Cadence(parse_number(FormField::Cadence, &self.cadence)?)
            }
            WorkoutType::Cycling => {
                VariantMetric::Elevation(parse_number(FormField::Elevation, &self.elevation)?)
            }
        };

        require_positive(FormField::Distance, distance_km)?;
        require_positive(FormField::Duration, duration_min)?;
        match metric {
            VariantMetric::Cadence(cadence) => require_positive(FormField::Cadence, cadence)?,
            VariantMetric::Elevation(elevation) => {
                if !elevation_rule.accepts(elevation) {
                    return Err(InputError::NotPositive {
                        field: FormField::Elevation,
                    });
                }
            }
        }

        Ok(WorkoutDraft {
            distance_km,
            duration_min,
            metric,
        })
    }
}

fn parse_number(field: FormField, raw: &str) -> Result<f64, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0.0);
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotANumber { field }),
    }
}

fn require_positive(field: FormField, value: f64) -> Result<(), InputError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(InputError::NotPositive { field })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VariantMetric {
    Cadence(f64),
    Elevation(f64),
}

/// Validated numbers, waiting for a coordinate and an identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutDraft {
    pub distance_km: f64,
    pub duration_min: f64,
    pub metric: VariantMetric,
}

impl WorkoutDraft {
    pub fn into_workout(
        self,
        id: WorkoutId,
        created_at: DateTime<Local>,
        coordinates: Coordinate,
    ) -> Workout {
        match self.metric {
            VariantMetric::Cadence(cadence) => Workout::running(
                id,
                created_at,
                coordinates,
                self.distance_km,
                self.duration_min,
                cadence,
            ),
            VariantMetric::Elevation(elevation) => Workout::cycling(
                id,
                created_at,
                coordinates,
                self.distance_km,
                self.duration_min,
                elevation,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(kind: WorkoutType, distance: &str, duration: &str, metric: &str) -> FormInput {
        let mut input = FormInput::new(kind);
        input.distance = distance.into();
        input.duration = duration.into();
        match kind {
            WorkoutType::Running => input.cadence = metric.into(),
            WorkoutType::Cycling => input.elevation = metric.into(),
        }
        input
    }

    #[test]
    fn parses_running_input() {
        let draft = input(WorkoutType::Running, "5", " 24 ", "180")
            .parse(ElevationRule::default())
            .unwrap();
        assert_eq!(draft.distance_km, 5.0);
        assert_eq!(draft.duration_min, 24.0);
        assert_eq!(draft.metric, VariantMetric::Cadence(180.0));
    }

    #[test]
    fn rejects_non_numeric_fields() {
        let err = input(WorkoutType::Running, "abc", "24", "180")
            .parse(ElevationRule::default())
            .unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                field: FormField::Distance
            }
        );

        let err = input(WorkoutType::Cycling, "10", "30", "inf")
            .parse(ElevationRule::default())
            .unwrap_err();
        assert_eq!(err.field(), FormField::Elevation);
    }

    #[test]
    fn finiteness_is_checked_before_sign() {
        let err = input(WorkoutType::Running, "-5", "24", "x")
            .parse(ElevationRule::default())
            .unwrap_err();
        assert_eq!(
            err,
            InputError::NotANumber {
                field: FormField::Cadence
            }
        );
    }

    #[test]
    fn rejects_zero_and_negative_core_fields() {
        for (distance, duration, cadence) in [("0", "24", "180"), ("5", "-1", "180"), ("5", "24", "0"), ("", "24", "180")] {
            let err = input(WorkoutType::Running, distance, duration, cadence)
                .parse(ElevationRule::default())
                .unwrap_err();
            assert!(matches!(err, InputError::NotPositive { .. }), "{distance}/{duration}/{cadence}");
        }
    }

    #[test]
    fn elevation_sign_depends_on_rule() {
        let negative = input(WorkoutType::Cycling, "20", "60", "-40");
        let zero = input(WorkoutType::Cycling, "20", "60", "0");

        let draft = negative.parse(ElevationRule::FiniteOnly).unwrap();
        assert_eq!(draft.metric, VariantMetric::Elevation(-40.0));
        assert!(negative.parse(ElevationRule::NonNegative).is_err());

        assert!(zero.parse(ElevationRule::FiniteOnly).is_ok());
        assert!(zero.parse(ElevationRule::NonNegative).is_ok());
        assert_eq!(
            zero.parse(ElevationRule::Positive).unwrap_err(),
            InputError::NotPositive {
                field: FormField::Elevation
            }
        );
    }

    #[test]
    fn hidden_variant_field_is_ignored() {
        let mut running = input(WorkoutType::Running, "5", "24", "180");
        running.elevation = "garbage".into();
        assert!(running.parse(ElevationRule::default()).is_ok());
    }

    #[test]
    fn clear_keeps_selected_type() {
        let mut form = input(WorkoutType::Cycling, "20", "60", "100");
        form.clear();
        assert_eq!(form, FormInput::new(WorkoutType::Cycling));
    }
}
