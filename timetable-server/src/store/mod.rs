//! Read interfaces the engine consumes.
//!
//! Persistence of trips, routes, stops and addresses lives outside this
//! engine; these traits are the seam it sees. They also let the query and
//! planning code be tested against in-memory data (see [`memory`]).
//!
//! All three interfaces treat "nothing found" as a normal outcome, expressed
//! as an empty collection or `None`, never as an error. Availability and
//! retry policy belong to the implementing collaborator.

mod memory;

pub use memory::{FixtureError, InMemoryNetwork};

use crate::domain::{NearestStop, RouteSummary, ScheduledTrip};

/// Read access to the scheduled-trip store.
pub trait TimetableStore {
    /// All trips recorded for `(company, stop)`, unfiltered by date or time.
    ///
    /// The result may contain duplicate rows from ingestion; callers are
    /// expected to deduplicate.
    fn trips_at_stop(&self, company: &str, stop_name: &str) -> Vec<ScheduledTrip>;
}

/// Read access to the route/stop graph.
pub trait RouteGraphLookup {
    /// Distinct route numbers serving the stop.
    fn route_numbers_at_stop(&self, company: &str, stop_name: &str) -> Vec<String>;

    /// Look up a single route by number.
    fn route_by_number(&self, company: &str, route_number: &str) -> Option<RouteSummary>;
}

/// Free-text address to nearest-stop resolution.
pub trait NearestStopResolver {
    /// The nearest stop to the given address, with walking minutes.
    ///
    /// `None` means the address could not be matched; this is a normal
    /// outcome, not an error.
    fn nearest_stop(&self, company: &str, address: &str) -> Option<NearestStop>;
}
