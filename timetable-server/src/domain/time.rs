//! Clock-time handling for timetable entries.
//!
//! The timetable stores times of day as "HH:MM" strings with no date
//! component; overnight services simply wrap past midnight. This module
//! provides a validated time-of-day type and the wrap-aware arithmetic the
//! query engine needs.

use chrono::{NaiveTime, Timelike};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Minutes in a day; all wrap-around arithmetic is modulo this.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// A validated time of day with minute precision.
///
/// `ClockTime` carries no date: "00:21" on a board queried late in the
/// evening means twenty-one minutes past the *next* midnight, and it is the
/// query window logic, not this type, that decides which day a value belongs
/// to. Ordering is plain time-of-day ordering.
///
/// # Examples
///
/// ```
/// use timetable_server::domain::ClockTime;
///
/// let t = ClockTime::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
///
/// assert!(ClockTime::parse_hhmm("1430").is_err());
/// assert!(ClockTime::parse_hhmm("25:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockTime(NaiveTime);

impl ClockTime {
    /// Create a time from hour and minute components.
    ///
    /// Returns an error when the components are out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(ClockTime)
            .ok_or_else(|| TimeError::new("hour or minute out of range"))
    }

    /// Parse a time from strict "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_server::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(ClockTime::parse_hhmm("7:30").is_err());
    /// assert!(ClockTime::parse_hhmm("07-30").is_err());
    /// assert!(ClockTime::parse_hhmm("07:60").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Self::from_hm(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Minutes since midnight (0-1439).
    pub fn minutes_from_midnight(&self) -> i64 {
        self.hour() as i64 * 60 + self.minute() as i64
    }

    /// Add minutes, wrapping past midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_server::domain::ClockTime;
    ///
    /// let t = ClockTime::parse_hhmm("23:30").unwrap();
    /// assert_eq!(t.add_minutes(45).to_string(), "00:15");
    /// ```
    pub fn add_minutes(&self, minutes: i64) -> Self {
        let total = (self.minutes_from_midnight() + minutes).rem_euclid(MINUTES_PER_DAY);
        // rem_euclid keeps the value in 0..1440, so the components are valid
        ClockTime(
            NaiveTime::from_hms_opt((total / 60) as u32, (total % 60) as u32, 0)
                .unwrap_or(self.0),
        )
    }

    /// Minutes from `self` forward to `other`, wrapping past midnight.
    ///
    /// Always in `0..1440`: a target earlier in the day is treated as
    /// tomorrow.
    pub fn minutes_until(&self, other: ClockTime) -> i64 {
        (other.minutes_from_midnight() - self.minutes_from_midnight()).rem_euclid(MINUTES_PER_DAY)
    }
}

impl Ord for ClockTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ClockTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::parse_hhmm(&s).map_err(D::Error::custom)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    #[test]
    fn parse_valid_times() {
        assert_eq!(t("00:00").hour(), 0);
        assert_eq!(t("00:00").minute(), 0);
        assert_eq!(t("23:59").hour(), 23);
        assert_eq!(t("23:59").minute(), 59);
        assert_eq!(t("14:30").minutes_from_midnight(), 14 * 60 + 30);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(ClockTime::parse_hhmm("1430").is_err());
        assert!(ClockTime::parse_hhmm("14:3").is_err());
        assert!(ClockTime::parse_hhmm("14:300").is_err());

        // Missing colon
        assert!(ClockTime::parse_hhmm("14-30").is_err());
        assert!(ClockTime::parse_hhmm("14.30").is_err());

        // Non-digit characters
        assert!(ClockTime::parse_hhmm("ab:cd").is_err());
        assert!(ClockTime::parse_hhmm("1a:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(ClockTime::parse_hhmm("24:00").is_err());
        assert!(ClockTime::parse_hhmm("99:00").is_err());
        assert!(ClockTime::parse_hhmm("12:60").is_err());
        assert!(ClockTime::parse_hhmm("12:99").is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(t("00:00").to_string(), "00:00");
        assert_eq!(t("09:05").to_string(), "09:05");
        assert_eq!(t("23:59").to_string(), "23:59");
    }

    #[test]
    fn ordering() {
        assert!(t("10:00") < t("11:00"));
        assert!(t("10:30") < t("10:31"));
        assert!(t("23:59") > t("00:00"));
    }

    #[test]
    fn add_minutes_same_day() {
        assert_eq!(t("10:00").add_minutes(120), t("12:00"));
        assert_eq!(t("10:30").add_minutes(45), t("11:15"));
        assert_eq!(t("10:30").add_minutes(0), t("10:30"));
    }

    #[test]
    fn add_minutes_wraps_midnight() {
        assert_eq!(t("23:30").add_minutes(60), t("00:30"));
        assert_eq!(t("22:00").add_minutes(120), t("00:00"));
        assert_eq!(t("00:10").add_minutes(-20), t("23:50"));
    }

    #[test]
    fn minutes_until_forward() {
        assert_eq!(t("10:00").minutes_until(t("12:30")), 150);
        assert_eq!(t("10:00").minutes_until(t("10:00")), 0);
    }

    #[test]
    fn minutes_until_wraps() {
        // Target earlier in the day counts as tomorrow
        assert_eq!(t("23:00").minutes_until(t("00:21")), 81);
        assert_eq!(t("23:59").minutes_until(t("00:00")), 1);
    }

    #[test]
    fn serde_roundtrip() {
        let time = t("08:05");
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"08:05\"");
        let back: ClockTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);
    }

    #[test]
    fn serde_rejects_malformed() {
        assert!(serde_json::from_str::<ClockTime>("\"8:05\"").is_err());
        assert!(serde_json::from_str::<ClockTime>("\"24:00\"").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_time_string()(hour in 0u32..24, minute in 0u32..60) -> String {
            format!("{:02}:{:02}", hour, minute)
        }
    }

    proptest! {
        /// Any valid HH:MM string parses successfully
        #[test]
        fn valid_hhmm_parses(s in valid_time_string()) {
            prop_assert!(ClockTime::parse_hhmm(&s).is_ok());
        }

        /// Parse then display roundtrips
        #[test]
        fn parse_display_roundtrip(s in valid_time_string()) {
            let parsed = ClockTime::parse_hhmm(&s).unwrap();
            prop_assert_eq!(parsed.to_string(), s);
        }

        /// Invalid hour is rejected
        #[test]
        fn invalid_hour_rejected(hour in 24u32..100, minute in 0u32..60) {
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(ClockTime::parse_hhmm(&s).is_err());
        }

        /// Invalid minute is rejected
        #[test]
        fn invalid_minute_rejected(hour in 0u32..24, minute in 60u32..100) {
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(ClockTime::parse_hhmm(&s).is_err());
        }

        /// add_minutes always yields a valid time and is periodic in a day
        #[test]
        fn add_minutes_periodic(s in valid_time_string(), mins in -5000i64..5000) {
            let t = ClockTime::parse_hhmm(&s).unwrap();
            let advanced = t.add_minutes(mins);
            prop_assert_eq!(advanced, t.add_minutes(mins + 1440));
        }

        /// Adding then subtracting the same amount is the identity
        #[test]
        fn add_sub_identity(s in valid_time_string(), mins in 0i64..3000) {
            let t = ClockTime::parse_hhmm(&s).unwrap();
            prop_assert_eq!(t.add_minutes(mins).add_minutes(-mins), t);
        }

        /// minutes_until is always in 0..1440 and consistent with add_minutes
        #[test]
        fn minutes_until_consistent(a in valid_time_string(), b in valid_time_string()) {
            let from = ClockTime::parse_hhmm(&a).unwrap();
            let to = ClockTime::parse_hhmm(&b).unwrap();
            let gap = from.minutes_until(to);
            prop_assert!((0..1440).contains(&gap));
            prop_assert_eq!(from.add_minutes(gap), to);
        }
    }
}
