use chrono::NaiveDate;

use crate::{
    store::entities::HabitEntity,
    utils::percentage::{ratio_percentage, Percentage},
};

/// Completion counts for one week across the whole collection. `total` is one slot per
/// habit per day of the week.
#[derive(Debug, PartialEq, Eq)]
pub struct WeeklySummary {
    pub completed: usize,
    pub total: usize,
}

impl WeeklySummary {
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Share of completed slots. 0% for an empty collection.
    pub fn percentage(&self) -> Percentage {
        ratio_percentage(self.completed, self.total)
    }
}

/// Number of days of `days` the habit was completed on.
pub fn days_completed(habit: &HabitEntity, days: &[NaiveDate]) -> usize {
    days.iter().filter(|d| habit.completed_on(**d)).count()
}

/// Counts completed `(habit, day)` pairs in `week` across all habits.
pub fn weekly_completion(habits: &[HabitEntity], week: &[NaiveDate; 7]) -> WeeklySummary {
    WeeklySummary {
        completed: habits.iter().map(|h| days_completed(h, week)).sum(),
        total: habits.len() * week.len(),
    }
}
