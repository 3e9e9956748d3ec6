use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

pub const J2000_JD: f64 = 2_451_545.0;
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;

// TT - UTC, held fixed; good to well under a minute for present-day dates.
const DELTA_T_SECONDS: f64 = 69.184;

/// The instant a chart is drawn for.
///
/// `jd_tt` is the Julian date on the TT scale, which every position query uses.
/// `utc` is kept for titling and is only meaningful to the nearest second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTime {
    pub utc: DateTime<Utc>,
    pub jd_tt: f64,
}

impl ChartTime {
    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        let unix = utc.timestamp() as f64 + utc.timestamp_subsec_nanos() as f64 * 1e-9;
        let jd_utc = UNIX_EPOCH_JD + unix / SECONDS_PER_DAY;
        Self {
            utc,
            jd_tt: jd_utc + DELTA_T_SECONDS / SECONDS_PER_DAY,
        }
    }

    /// Shift by `days`. `jd_tt` always moves; `utc` stays put when the result
    /// falls outside what chrono can represent.
    pub fn add_days(&self, days: f64) -> Self {
        let utc = TimeDelta::try_milliseconds((days * SECONDS_PER_DAY * 1e3) as i64)
            .and_then(|d| self.utc.checked_add_signed(d))
            .unwrap_or(self.utc);
        Self {
            utc,
            jd_tt: self.jd_tt + days,
        }
    }

    pub fn days_since_j2000(&self) -> f64 {
        self.jd_tt - J2000_JD
    }

    pub fn julian_centuries(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_CENTURY
    }

    pub fn utc_label(&self) -> String {
        self.utc.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

/// Resolves "a calendar timestamp, or now" into a [`ChartTime`].
pub trait TimeProvider {
    fn resolve(&self, when: Option<DateTime<Utc>>) -> ChartTime;
}

pub struct SystemClock;

impl TimeProvider for SystemClock {
    fn resolve(&self, when: Option<DateTime<Utc>>) -> ChartTime {
        ChartTime::from_utc(when.unwrap_or_else(Utc::now))
    }
}

/// A clock frozen at one instant.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl TimeProvider for FixedClock {
    fn resolve(&self, when: Option<DateTime<Utc>>) -> ChartTime {
        ChartTime::from_utc(when.unwrap_or(self.0))
    }
}

/// Parse an RFC 3339 timestamp, or a UTC `YYYY-MM-DD[ HH:MM[:SS]]`.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;
    use chrono::TimeZone;

    #[test]
    fn j2000_noon_maps_to_j2000_jd() {
        let t = ChartTime::from_utc(Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap());
        // Only the fixed TT offset separates them
        assert!(approx(t.jd_tt, J2000_JD + DELTA_T_SECONDS / SECONDS_PER_DAY, 1e-9));
        assert!(t.julian_centuries().abs() < 1e-7);
    }

    #[test]
    fn add_days_moves_both_scales() {
        let t = ChartTime::from_utc(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        let later = t.add_days(7.0);
        assert!(approx(later.jd_tt - t.jd_tt, 7.0, 1e-12));
        assert_eq!(later.utc, Utc.with_ymd_and_hms(2024, 3, 8, 0, 0, 0).unwrap());

        let earlier = t.add_days(-0.5);
        assert_eq!(earlier.utc, Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap());
    }

    #[test]
    fn add_days_beyond_calendar_range_keeps_utc() {
        let t = ChartTime::from_utc(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let far = t.add_days(1.0e8);
        assert!(approx(far.jd_tt - t.jd_tt, 1.0e8, 1e-3));
        assert_eq!(far.utc, t.utc);

        let past = t.add_days(-1.0e12);
        assert_eq!(past.utc, t.utc);
    }

    #[test]
    fn parses_supported_timestamp_forms() {
        let want = Utc.with_ymd_and_hms(2023, 6, 21, 18, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2023-06-21T18:30:00Z"), Some(want));
        assert_eq!(parse_timestamp("2023-06-21T20:30:00+02:00"), Some(want));
        assert_eq!(parse_timestamp("2023-06-21 18:30:00"), Some(want));
        assert_eq!(parse_timestamp("2023-06-21 18:30"), Some(want));
        assert_eq!(
            parse_timestamp("2023-06-21"),
            Some(Utc.with_ymd_and_hms(2023, 6, 21, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_garbage_timestamps() {
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2023-13-01"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn clocks_resolve_explicit_time_verbatim() {
        let when = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(SystemClock.resolve(Some(when)).utc, when);

        let frozen = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(FixedClock(frozen).resolve(None).utc, frozen);
    }

    #[test]
    fn utc_label_format() {
        let t = ChartTime::from_utc(Utc.with_ymd_and_hms(2022, 2, 3, 4, 5, 6).unwrap());
        assert_eq!(t.utc_label(), "2022-02-03 04:05:06 UTC");
    }
}
