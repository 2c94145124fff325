//! Wall-clock access for log timestamps.

use chrono::{Local, NaiveTime};

pub trait Clock {
    fn now(&self) -> NaiveTime;
}

/// Local time of day.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// `HH:MM:SS`, 24-hour.
pub fn format_timestamp(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        let time = NaiveTime::from_hms_milli_opt(21, 5, 9, 999).unwrap();
        assert_eq!(format_timestamp(time), "21:05:09");
        assert_eq!(format_timestamp(FixedClock(NaiveTime::MIN).now()), "00:00:00");
    }
}
