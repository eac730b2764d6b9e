//! Operating calendar: which dates a scheduled trip runs on.
//!
//! A trip normally recurs on a weekly pattern, but footnotes can add extra
//! dates (public holidays running a Sunday service, say) and disruptions can
//! suspend specific dates outright.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// When a scheduled trip operates.
///
/// Precedence is fixed: a disrupted date never operates, regardless of the
/// weekly pattern or the added dates; an added date operates even when its
/// weekday is not in the pattern. A pattern with no weekly days and no added
/// dates never operates.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use timetable_server::domain::OperatingPattern;
///
/// let pattern = OperatingPattern::new(
///     [Weekday::Mon, Weekday::Fri],
///     [],
///     [NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()],
/// );
///
/// // Friday 2024-03-15 is disrupted even though Friday is a weekly day
/// assert!(!pattern.operates_on(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
/// // The following Monday runs normally
/// assert!(pattern.operates_on(NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingPattern {
    /// The trip's normal recurring weekdays.
    weekly_days: HashSet<Weekday>,

    /// Dates the trip runs despite not matching the weekly pattern.
    added_dates: BTreeSet<NaiveDate>,

    /// Dates the trip is suspended, overriding everything else.
    disrupted_dates: BTreeSet<NaiveDate>,
}

impl OperatingPattern {
    /// Create a pattern from its three components.
    pub fn new(
        weekly_days: impl IntoIterator<Item = Weekday>,
        added_dates: impl IntoIterator<Item = NaiveDate>,
        disrupted_dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            weekly_days: weekly_days.into_iter().collect(),
            added_dates: added_dates.into_iter().collect(),
            disrupted_dates: disrupted_dates.into_iter().collect(),
        }
    }

    /// A pattern that runs every day of the week.
    pub fn daily() -> Self {
        Self::new(
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ],
            [],
            [],
        )
    }

    /// Whether the trip runs on `date`.
    ///
    /// Disruption is checked before anything else; it must never be merged
    /// into the weekly/added check.
    pub fn operates_on(&self, date: NaiveDate) -> bool {
        if self.disrupted_dates.contains(&date) {
            return false;
        }
        if self.added_dates.contains(&date) {
            return true;
        }
        self.weekly_days.contains(&date.weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-03-15 is a Friday.

    #[test]
    fn weekly_pattern_matches_weekday() {
        let pattern = OperatingPattern::new([Weekday::Fri], [], []);

        assert!(pattern.operates_on(date(2024, 3, 15))); // Friday
        assert!(!pattern.operates_on(date(2024, 3, 16))); // Saturday
        assert!(pattern.operates_on(date(2024, 3, 22))); // next Friday
    }

    #[test]
    fn added_date_runs_off_pattern() {
        let pattern = OperatingPattern::new([Weekday::Mon], [date(2024, 3, 15)], []);

        // Friday is not a weekly day but is explicitly added
        assert!(pattern.operates_on(date(2024, 3, 15)));
        assert!(!pattern.operates_on(date(2024, 3, 22)));
    }

    #[test]
    fn disruption_beats_weekly_day() {
        let pattern = OperatingPattern::new([Weekday::Fri], [], [date(2024, 3, 15)]);

        assert!(!pattern.operates_on(date(2024, 3, 15)));
        assert!(pattern.operates_on(date(2024, 3, 22)));
    }

    #[test]
    fn disruption_beats_added_date() {
        // The same date both added and disrupted: disruption wins
        let pattern =
            OperatingPattern::new([], [date(2024, 3, 15)], [date(2024, 3, 15)]);

        assert!(!pattern.operates_on(date(2024, 3, 15)));
    }

    #[test]
    fn exception_only_pattern_works() {
        // No weekly days at all, only explicit dates
        let pattern = OperatingPattern::new([], [date(2024, 3, 15), date(2024, 3, 17)], []);

        assert!(pattern.operates_on(date(2024, 3, 15)));
        assert!(pattern.operates_on(date(2024, 3, 17)));
        assert!(!pattern.operates_on(date(2024, 3, 16)));
    }

    #[test]
    fn empty_pattern_never_operates() {
        let pattern = OperatingPattern::default();

        for day in 0..14 {
            assert!(!pattern.operates_on(date(2024, 3, 1) + chrono::Duration::days(day)));
        }
    }

    #[test]
    fn daily_runs_every_day() {
        let pattern = OperatingPattern::daily();

        for day in 0..7 {
            assert!(pattern.operates_on(date(2024, 3, 11) + chrono::Duration::days(day)));
        }
    }

    #[test]
    fn serde_roundtrip() {
        let pattern = OperatingPattern::new(
            [Weekday::Mon, Weekday::Sat],
            [date(2024, 12, 25)],
            [date(2024, 12, 31)],
        );

        let json = serde_json::to_string(&pattern).unwrap();
        let back: OperatingPattern = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pattern);
    }
}
