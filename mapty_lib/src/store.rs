use crate::workout::{Workout, WorkoutId};

/// Append-only list of the workouts logged this session, in creation order.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    pub fn find_by_id(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|workout| workout.id() == id)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Workout> {
        self.workouts.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};

    use super::*;
    use crate::coordinate::Coordinate;

    fn run(id: &str) -> Workout {
        let at = Local.with_ymd_and_hms(2026, 5, 1, 8, 0, 0).unwrap();
        Workout::running(id.into(), at, Coordinate::new(1.0, 2.0), 5.0, 25.0, 170.0)
    }

    #[test]
    fn keeps_insertion_order() {
        let mut store = WorkoutStore::new();
        assert!(store.is_empty());
        store.append(run("a"));
        store.append(run("b"));

        let ids: Vec<_> = store.iter().map(|w| w.id().as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn finds_by_exact_id() {
        let mut store = WorkoutStore::new();
        store.append(run("1776000000"));
        assert!(store.find_by_id(&"1776000000".into()).is_some());
        assert!(store.find_by_id(&"177600000".into()).is_none());
    }
}
