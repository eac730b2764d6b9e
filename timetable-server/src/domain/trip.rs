//! Scheduled trips: one timetabled visit of a vehicle to a stop.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::OperatingPattern;
use super::time::ClockTime;

/// One scheduled visit of a vehicle to a stop.
///
/// Trips are created in bulk by timetable import and are immutable
/// afterwards; the query engine only ever reads them. For a terminal-only
/// visit the arrival and departure times are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTrip {
    /// Operating company.
    pub company: String,

    /// Route the trip belongs to.
    pub route_number: String,

    /// Run of the route this visit belongs to.
    pub journey_number: u32,

    /// The stop this visit occurs at.
    pub stop_name: String,

    /// Where the trip terminates.
    pub destination: String,

    /// Arrival time at this stop.
    pub arrival: ClockTime,

    /// Departure time from this stop.
    pub departure: ClockTime,

    /// First calendar date on which this trip exists at all.
    pub valid_from: NaiveDate,

    /// Last calendar date on which this trip exists at all.
    pub valid_to: NaiveDate,

    /// When the trip operates within its validity window.
    pub pattern: OperatingPattern,
}

impl ScheduledTrip {
    /// Assemble a trip. Trips are never mutated after this.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company: impl Into<String>,
        route_number: impl Into<String>,
        journey_number: u32,
        stop_name: impl Into<String>,
        destination: impl Into<String>,
        arrival: ClockTime,
        departure: ClockTime,
        valid_from: NaiveDate,
        valid_to: NaiveDate,
        pattern: OperatingPattern,
    ) -> Self {
        Self {
            company: company.into(),
            route_number: route_number.into(),
            journey_number,
            stop_name: stop_name.into(),
            destination: destination.into(),
            arrival,
            departure,
            valid_from,
            valid_to,
            pattern,
        }
    }

    /// Whether this visit is at the trip's terminus.
    pub fn is_terminal_visit(&self) -> bool {
        self.stop_name == self.destination
    }
}
