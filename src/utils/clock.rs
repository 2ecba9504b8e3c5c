use chrono::{DateTime, Local};

/// Represents an entity responsible for providing the current moment across the
/// application. Day boundaries follow local wall-clock time, so the clock hands out
/// local datetimes.
pub trait Clock: Sync + Send + 'static {
    fn time(&self) -> DateTime<Local>;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Local> {
        Local::now()
    }
}
