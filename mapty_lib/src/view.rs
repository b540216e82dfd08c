//! Render-agnostic view models for the workout list and marker popups.

use crate::workout::{Workout, WorkoutId, WorkoutKind, WorkoutType};

#[derive(Debug, Clone, PartialEq)]
pub struct RowField {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl RowField {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// One entry of the workout list, tagged with the id of its workout.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRow {
    pub id: WorkoutId,
    pub workout_type: WorkoutType,
    pub title: String,
    pub fields: Vec<RowField>,
}

impl WorkoutRow {
    pub fn class_name(&self) -> String {
        format!("workout workout--{}", self.workout_type.tag())
    }
}

impl From<&Workout> for WorkoutRow {
    fn from(workout: &Workout) -> Self {
        let workout_type = workout.workout_type();
        let mut fields = vec![
            RowField::new(workout_type.emoji(), workout.distance_km().to_string(), "km"),
            RowField::new("⏱", workout.duration_min().to_string(), "min"),
        ];

        match *workout.kind() {
            WorkoutKind::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                let pace = format!("{:.1}", round_half_up(pace_min_per_km));
                fields.push(RowField::new("⚡️", pace, "min/km"));
                fields.push(RowField::new("🦶🏼", cadence_spm.to_string(), "spm"));
            }
            WorkoutKind::Cycling {
                elevation_gain_m,
                speed_km_per_hour,
            } => {
                fields.push(RowField::new("⚡️", speed_km_per_hour.to_string(), "km/h"));
                fields.push(RowField::new("⛰", elevation_gain_m.to_string(), "m"));
            }
        }

        Self {
            id: workout.id().clone(),
            workout_type,
            title: workout.description().to_owned(),
            fields,
        }
    }
}

/// One decimal, ties away from zero. Plain `{:.1}` sends 4.25 to 4.2.
fn round_half_up(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub text: String,
    pub class_name: String,
}

impl From<&Workout> for PopupContent {
    fn from(workout: &Workout) -> Self {
        let workout_type = workout.workout_type();
        Self {
            text: format!("{} {}", workout_type.emoji(), workout.description()),
            class_name: format!("{}-popup", workout_type.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;
    use crate::coordinate::Coordinate;

    fn at() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2026, 4, 7, 18, 0, 0).unwrap()
    }

    #[test]
    fn running_row_rounds_pace() {
        let run = Workout::running("r".into(), at(), Coordinate::new(0.0, 0.0), 3.0, 20.0, 165.0);
        let row = WorkoutRow::from(&run);

        assert_eq!(row.title, "Running on April 7");
        assert_eq!(row.class_name(), "workout workout--running");
        let values: Vec<_> = row.fields.iter().map(|f| (f.value.as_str(), f.unit)).collect();
        assert_eq!(
            values,
            [("3", "km"), ("20", "min"), ("6.7", "min/km"), ("165", "spm")]
        );
        assert_eq!(row.fields[0].icon, "🏃‍♂️");
    }

    #[test]
    fn cycling_row_shows_speed_and_elevation() {
        let ride = Workout::cycling("c".into(), at(), Coordinate::new(0.0, 0.0), 30.0, 60.0, 0.0);
        let row = WorkoutRow::from(&ride);

        let values: Vec<_> = row.fields.iter().map(|f| (f.value.as_str(), f.unit)).collect();
        assert_eq!(values, [("30", "km"), ("60", "min"), ("0.5", "km/h"), ("0", "m")]);
        assert_eq!(row.id.as_str(), "c");
    }

    #[test]
    fn pace_ties_round_up() {
        let run = Workout::running("r".into(), at(), Coordinate::new(0.0, 0.0), 4.0, 17.0, 170.0);
        assert_eq!(WorkoutRow::from(&run).fields[2].value, "4.3");

        let sprint = Workout::running("s".into(), at(), Coordinate::new(0.0, 0.0), 4.0, 1.0, 200.0);
        assert_eq!(WorkoutRow::from(&sprint).fields[2].value, "0.3");
    }

    #[test]
    fn popup_has_emoji_and_description() {
        let ride = Workout::cycling("c".into(), at(), Coordinate::new(0.0, 0.0), 30.0, 60.0, 120.0);
        let popup = PopupContent::from(&ride);
        assert_eq!(popup.text, "🚴‍♀️ Cycling on April 7");
        assert_eq!(popup.class_name, "cycling-popup");
    }
}
