
use chrono::{DateTime, Duration, NaiveDate, TimeZone};
use now::DateTimeNow;


/// This is the standard way of converting a date to a string in habitual.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns the Monday-Sunday week containing `moment`, Monday first.
pub fn current_week<Tz: TimeZone>(moment: DateTime<Tz>) -> [NaiveDate; 7] {
    let monday = moment.beginning_of_week().date_naive();
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}

/// Returns `today` and the `n - 1` days before it, newest first.
pub fn last_n_days(today: NaiveDate, n: u32) -> Vec<NaiveDate> {
    (0..n).map(|i| today - Duration::days(i as i64)).collect()
}

/// Human readable rendering used by the dashboard header, like "Monday, Jan 5".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}
