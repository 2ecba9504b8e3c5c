use chrono::NaiveDate;

use crate::store::entities::HabitEntity;

/// Number of habits completed on one day of the trailing window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayActivity {
    pub date: NaiveDate,
    pub count: usize,
}

/// Heat bucket for one day of the activity map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatLevel {
    Empty,
    Low,
    High,
}

impl HeatLevel {
    /// Buckets a day against the busiest day of the window. A day at most 20% as busy
    /// renders empty, at most 55% renders low, anything above renders high.
    pub fn bucket(count: usize, max: usize) -> HeatLevel {
        let intensity = if max == 0 {
            0.
        } else {
            count as f64 / max as f64
        };
        if intensity <= 0.2 {
            HeatLevel::Empty
        } else if intensity <= 0.55 {
            HeatLevel::Low
        } else {
            HeatLevel::High
        }
    }
}

/// Counts completed habits for every day of `days`, preserving the order of the window.
pub fn activity_map(habits: &[HabitEntity], days: &[NaiveDate]) -> Vec<DayActivity> {
    days.iter()
        .map(|&date| DayActivity {
            date,
            count: habits.iter().filter(|h| h.completed_on(date)).count(),
        })
        .collect()
}
