use chrono::{DateTime, Duration, Utc};

/// Hours added to UTC before formatting (Indochina Time).
pub const UTC_OFFSET_HOURS: i64 = 7;
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Shifts `now` by the fixed offset and renders it as `dd/MM/yyyy HH:mm:ss`.
/// The shifted instant is formatted as a UTC wall clock, with no further zone conversion.
pub fn local_timestamp(now: DateTime<Utc>) -> String {
    (now + Duration::hours(UTC_OFFSET_HOURS))
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

#[cfg(test)]
pub(crate) struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
