use chrono::NaiveDate;

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use std::collections::BTreeSet;
use std::sync::Arc;

/// The struct used for storing a habit on the disk. `dates` holds the days the habit was
/// marked complete; the set representation keeps days unique and sorted, and each entry
/// serializes as a plain `YYYY-MM-DD` string.
#[derive(PartialEq, Eq, Debug, Serialize, Deserialize, Clone)]
pub struct HabitEntity {
    pub id: Arc<str>,
    pub name: Arc<str>,
    #[serde(default)]
    pub dates: BTreeSet<NaiveDate>,
}

impl HabitEntity {
    /// Creates a habit with a freshly generated opaque id and no completed days.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string().into(),
            name: name.into(),
            dates: BTreeSet::new(),
        }
    }

    /// Flips membership of `date`. Returns whether the day counts as complete afterwards.
    pub fn toggle_date(&mut self, date: NaiveDate) -> bool {
        if self.dates.remove(&date) {
            false
        } else {
            self.dates.insert(date);
            true
        }
    }

    pub fn completed_on(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn with_dates(self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::HabitEntity;

    const TEST_DATE: NaiveDate = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    #[test]
    fn test_toggle_twice_restores_dates() {
        let mut habit = HabitEntity::new("Read");
        let original = habit.dates.clone();

        assert!(habit.toggle_date(TEST_DATE));
        assert!(habit.completed_on(TEST_DATE));

        assert!(!habit.toggle_date(TEST_DATE));
        assert_eq!(habit.dates, original);
    }

    #[test]
    fn test_fresh_habits_get_unique_ids() {
        let a = HabitEntity::new("Read");
        let b = HabitEntity::new("Read");

        assert_ne!(a.id, b.id);
        assert!(a.dates.is_empty());
    }

    #[test]
    fn test_dates_serialize_as_iso_strings() {
        let habit = HabitEntity::new("Read").with_dates([TEST_DATE]);

        let json = serde_json::to_string(&habit).unwrap();

        assert!(json.contains("\"2024-01-01\""));
    }

    #[test]
    fn test_duplicate_toggle_targets_collapse() {
        let habit = HabitEntity::new("Read").with_dates([TEST_DATE, TEST_DATE]);

        assert_eq!(habit.dates.len(), 1);
    }
}
