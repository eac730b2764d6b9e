//! Full-day trip listings.
//!
//! Everything valid on one calendar date, regardless of time of day. Used
//! for day overviews and as the basis for tracking a specific scheduled run.

use chrono::NaiveDate;

use crate::domain::ScheduledTrip;
use crate::store::TimetableStore;

use super::board::TimetableQuery;

impl<S: TimetableStore> TimetableQuery<'_, S> {
    /// All trips at a stop that run on `date`, sorted by departure time.
    ///
    /// A trip qualifies when its operating pattern covers the date and the
    /// date falls within the trip's validity window, widened by one day on
    /// each side. The grace margin keeps overnight runs visible when they
    /// start just after or end just before midnight relative to their
    /// nominal validity window.
    pub fn trips_on_date(
        &self,
        company: &str,
        stop_name: &str,
        date: NaiveDate,
    ) -> Vec<ScheduledTrip> {
        let mut trips: Vec<ScheduledTrip> = self
            .store()
            .trips_at_stop(company, stop_name)
            .into_iter()
            .filter(|t| t.pattern.operates_on(date))
            .filter(|t| {
                let from = t.valid_from.pred_opt().unwrap_or(t.valid_from);
                let to = t.valid_to.succ_opt().unwrap_or(t.valid_to);
                date >= from && date <= to
            })
            .collect();
        trips.sort_by_key(|t| t.departure);
        trips
    }
}
