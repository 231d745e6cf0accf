// Injected clock for preview timestamps

use chrono::{DateTime, SecondsFormat, Utc};

/// Current-time capability, injected into the cache builder so tests can
/// pin the preview timestamp.
pub trait Clock {
    fn now_utc(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// ISO-8601 with microseconds and a literal 'Z' suffix.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_has_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 1).unwrap();
        assert_eq!(format_timestamp(ts), "2026-08-30T12:00:01.000000Z");
    }
}
