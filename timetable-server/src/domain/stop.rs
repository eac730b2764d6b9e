//! Stop locations and nearest-stop resolution results.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A stop in the network.
///
/// `distances` maps neighbouring stop names to inter-stop travel minutes;
/// it is filled by timetable generation and not consulted by the query
/// engine itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopLocation {
    /// Stop name, unique per company.
    pub name: String,

    /// Operating company.
    pub company: String,

    /// Travel minutes to neighbouring stops.
    #[serde(default)]
    pub distances: HashMap<String, i64>,
}

impl StopLocation {
    /// Assemble a stop location.
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        distances: HashMap<String, i64>,
    ) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            distances,
        }
    }
}

/// The "found" outcome of nearest-stop resolution: a stop plus the walking
/// time to reach it. Resolution that finds nothing is a normal outcome,
/// expressed as `Option::None` by the resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestStop {
    /// The resolved stop.
    pub stop: StopLocation,

    /// Walking time from the queried address to the stop.
    pub walk_minutes: i64,
}
