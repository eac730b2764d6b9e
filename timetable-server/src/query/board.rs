//! Departure and arrival boards.
//!
//! Given a stop, a company and a time of day, produce the next few scheduled
//! departures or arrivals. Daytime queries use a two-hour window; from 22:00
//! onward the board runs to the end of the evening and then keeps collecting
//! into the next day until it is full. Duplicate timetable rows are collapsed
//! before the board is cut to size.

use chrono::NaiveDate;

use crate::domain::{ClockTime, ScheduledTrip};
use crate::store::TimetableStore;

/// A board never shows more than this many entries.
pub const MAX_BOARD_RESULTS: usize = 3;

/// Width of the daytime candidate window in minutes.
const WINDOW_MINS: i64 = 120;

/// Queries at or after this time of day collect across midnight.
///
/// Times at or past the threshold count as the same evening; everything
/// earlier is treated as the next day when the board wraps.
const LATE_EVENING_MINS: i64 = 22 * 60;

/// Stop-time query engine over a [`TimetableStore`].
///
/// Stateless: every call is a pure function of its arguments and the store's
/// current contents. The calendar check runs against `today`, the day the
/// query is issued, even for candidates collected past midnight; next-day
/// candidates are deliberately not re-checked against the next calendar
/// date. That matches how the timetable has always answered "what runs
/// today".
pub struct TimetableQuery<'a, S: TimetableStore> {
    store: &'a S,
}

impl<'a, S: TimetableStore> TimetableQuery<'a, S> {
    /// Create a query engine over the given store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub(crate) fn store(&self) -> &'a S {
        self.store
    }

    /// The next departures from a stop, at most [`MAX_BOARD_RESULTS`].
    ///
    /// An empty result means nothing is scheduled in the window; it is a
    /// normal outcome.
    pub fn next_departures(
        &self,
        company: &str,
        stop_name: &str,
        today: NaiveDate,
        from: ClockTime,
    ) -> Vec<ScheduledTrip> {
        self.upcoming(company, stop_name, today, from, |t| t.departure)
    }

    /// The next arrivals at a stop, at most [`MAX_BOARD_RESULTS`].
    pub fn next_arrivals(
        &self,
        company: &str,
        stop_name: &str,
        today: NaiveDate,
        from: ClockTime,
    ) -> Vec<ScheduledTrip> {
        self.upcoming(company, stop_name, today, from, |t| t.arrival)
    }

    /// Shared sort-and-window routine behind both boards.
    ///
    /// `time_of` selects which time field of a trip the board is keyed on.
    fn upcoming(
        &self,
        company: &str,
        stop_name: &str,
        today: NaiveDate,
        from: ClockTime,
        time_of: fn(&ScheduledTrip) -> ClockTime,
    ) -> Vec<ScheduledTrip> {
        let mut trips: Vec<ScheduledTrip> = self
            .store
            .trips_at_stop(company, stop_name)
            .into_iter()
            .filter(|t| t.pattern.operates_on(today))
            .collect();
        trips.sort_by_key(time_of);

        let mut selected: Vec<ScheduledTrip> = Vec::new();
        if from.minutes_from_midnight() >= LATE_EVENING_MINS {
            // Late evening: the rest of the evening first, then everything
            // from 00:00 onward as next-day candidates. Earlier-evening
            // times are this evening's past, not tomorrow's, so they never
            // re-enter as next-day candidates. The trailing truncation
            // stops collection at a full board.
            selected.extend(trips.iter().filter(|t| time_of(t) >= from).cloned());
            selected.extend(
                trips
                    .iter()
                    .filter(|t| time_of(t).minutes_from_midnight() < LATE_EVENING_MINS)
                    .cloned(),
            );
        } else {
            // Daytime: a two-hour window, inclusive at both ends.
            let end = from.add_minutes(WINDOW_MINS);
            selected.extend(
                trips
                    .iter()
                    .filter(|t| time_of(t) >= from && time_of(t) <= end)
                    .cloned(),
            );
        }

        let mut board = dedup_by_destination_and_time(selected, time_of);
        board.truncate(MAX_BOARD_RESULTS);

        tracing::debug!(
            company,
            stop_name,
            %from,
            results = board.len(),
            "board query"
        );
        board
    }
}

/// Collapse candidates sharing `(destination, time)` with an earlier-sorted
/// candidate. Guards against duplicate timetable rows from ingestion.
fn dedup_by_destination_and_time(
    trips: Vec<ScheduledTrip>,
    time_of: fn(&ScheduledTrip) -> ClockTime,
) -> Vec<ScheduledTrip> {
    let mut seen: Vec<(String, ClockTime)> = Vec::new();
    let mut kept = Vec::new();
    for trip in trips {
        let key = (trip.destination.clone(), time_of(&trip));
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        kept.push(trip);
    }
    kept
}
