//! Route metadata.

use serde::{Deserialize, Serialize};

/// Static description of a route: its endpoints and ordered stop list.
///
/// Read-only to this engine; the route graph is maintained by timetable
/// import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Route identifier, unique per company.
    pub route_number: String,

    /// Operating company.
    pub company: String,

    /// First stop of the route.
    pub start_stop: String,

    /// Last stop of the route.
    pub end_stop: String,

    /// All stops in travel order, endpoints included.
    pub stops: Vec<String>,
}

impl RouteSummary {
    /// Assemble a route summary.
    pub fn new(
        route_number: impl Into<String>,
        company: impl Into<String>,
        start_stop: impl Into<String>,
        end_stop: impl Into<String>,
        stops: Vec<String>,
    ) -> Self {
        Self {
            route_number: route_number.into(),
            company: company.into(),
            start_stop: start_stop.into(),
            end_stop: end_stop.into(),
            stops,
        }
    }

    /// Whether the route calls at the named stop.
    pub fn serves(&self, stop_name: &str) -> bool {
        self.stops.iter().any(|s| s == stop_name)
    }
}
