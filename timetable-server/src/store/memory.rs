//! In-memory network data for serving fixtures and for tests.
//!
//! Loads a whole network (trips, routes, stops, address mappings) from a
//! JSON file and serves it through the read interfaces, in place of the
//! real persistence collaborators.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{NearestStop, RouteSummary, ScheduledTrip, StopLocation};

use super::{NearestStopResolver, RouteGraphLookup, TimetableStore};

/// Error loading a network fixture.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    /// The fixture file could not be read.
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The fixture file is not valid JSON for the expected shape.
    #[error("failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One address-to-stop mapping in a fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AddressEntry {
    company: String,
    address: String,
    stop: String,
    walk_minutes: i64,
}

/// On-disk shape of a network fixture.
#[derive(Debug, Default, Serialize, Deserialize)]
struct NetworkFixture {
    #[serde(default)]
    trips: Vec<ScheduledTrip>,
    #[serde(default)]
    routes: Vec<RouteSummary>,
    #[serde(default)]
    stops: Vec<StopLocation>,
    #[serde(default)]
    addresses: Vec<AddressEntry>,
}

/// A complete transit network held in memory.
///
/// Implements all three read interfaces. Trips are stored as ingested,
/// duplicates included; deduplication is the query engine's job.
#[derive(Debug, Default)]
pub struct InMemoryNetwork {
    trips: Vec<ScheduledTrip>,
    routes: Vec<RouteSummary>,
    stops: Vec<StopLocation>,

    /// (company, address text) to (stop name, walk minutes).
    addresses: HashMap<(String, String), (String, i64)>,
}

impl InMemoryNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a network from a JSON fixture file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load a network from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let fixture: NetworkFixture = serde_json::from_str(json)?;

        let mut network = Self {
            trips: fixture.trips,
            routes: fixture.routes,
            stops: fixture.stops,
            addresses: HashMap::new(),
        };
        for entry in fixture.addresses {
            network.addresses.insert(
                (entry.company, entry.address),
                (entry.stop, entry.walk_minutes),
            );
        }
        Ok(network)
    }

    /// Add a trip.
    pub fn add_trip(&mut self, trip: ScheduledTrip) {
        self.trips.push(trip);
    }

    /// Add a route.
    pub fn add_route(&mut self, route: RouteSummary) {
        self.routes.push(route);
    }

    /// Add a stop.
    pub fn add_stop(&mut self, stop: StopLocation) {
        self.stops.push(stop);
    }

    /// Map a free-text address to a stop with a walking time.
    pub fn add_address(
        &mut self,
        company: impl Into<String>,
        address: impl Into<String>,
        stop: impl Into<String>,
        walk_minutes: i64,
    ) {
        self.addresses
            .insert((company.into(), address.into()), (stop.into(), walk_minutes));
    }

    /// Number of trips held.
    pub fn trip_count(&self) -> usize {
        self.trips.len()
    }
}

impl TimetableStore for InMemoryNetwork {
    fn trips_at_stop(&self, company: &str, stop_name: &str) -> Vec<ScheduledTrip> {
        self.trips
            .iter()
            .filter(|t| t.company == company && t.stop_name == stop_name)
            .cloned()
            .collect()
    }
}

impl RouteGraphLookup for InMemoryNetwork {
    fn route_numbers_at_stop(&self, company: &str, stop_name: &str) -> Vec<String> {
        let mut numbers = Vec::new();
        for route in &self.routes {
            if route.company == company
                && route.serves(stop_name)
                && !numbers.contains(&route.route_number)
            {
                numbers.push(route.route_number.clone());
            }
        }
        numbers
    }

    fn route_by_number(&self, company: &str, route_number: &str) -> Option<RouteSummary> {
        self.routes
            .iter()
            .find(|r| r.company == company && r.route_number == route_number)
            .cloned()
    }
}

impl NearestStopResolver for InMemoryNetwork {
    fn nearest_stop(&self, company: &str, address: &str) -> Option<NearestStop> {
        let (stop_name, walk_minutes) = self
            .addresses
            .get(&(company.to_string(), address.to_string()))?;

        let stop = self
            .stops
            .iter()
            .find(|s| s.company == company && &s.name == stop_name)
            .cloned()
            .unwrap_or_else(|| StopLocation::new(stop_name.clone(), company, HashMap::new()));

        Some(NearestStop {
            stop,
            walk_minutes: *walk_minutes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, OperatingPattern};
    use chrono::NaiveDate;
    use std::io::Write as _;

    fn t(s: &str) -> ClockTime {
        ClockTime::parse_hhmm(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip(stop: &str, dep: &str) -> ScheduledTrip {
        ScheduledTrip::new(
            "Metro",
            "42",
            1,
            stop,
            "Harbour",
            t(dep),
            t(dep),
            date(2024, 1, 1),
            date(2024, 12, 31),
            OperatingPattern::daily(),
        )
    }

    #[test]
    fn trips_filtered_by_company_and_stop() {
        let mut network = InMemoryNetwork::new();
        network.add_trip(trip("Depot", "10:00"));
        network.add_trip(trip("Market Square", "10:10"));

        let mut other = trip("Depot", "10:00");
        other.company = "Rival".to_string();
        network.add_trip(other);

        let found = network.trips_at_stop("Metro", "Depot");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].stop_name, "Depot");

        assert!(network.trips_at_stop("Metro", "Airport").is_empty());
        assert_eq!(network.trips_at_stop("Rival", "Depot").len(), 1);
    }

    #[test]
    fn duplicate_rows_are_preserved() {
        // Deduplication is the query engine's concern, not the store's
        let mut network = InMemoryNetwork::new();
        network.add_trip(trip("Depot", "10:00"));
        network.add_trip(trip("Depot", "10:00"));

        assert_eq!(network.trips_at_stop("Metro", "Depot").len(), 2);
    }

    #[test]
    fn route_numbers_are_distinct() {
        let mut network = InMemoryNetwork::new();
        let stops = vec!["Depot".to_string(), "Harbour".to_string()];
        network.add_route(RouteSummary::new("42", "Metro", "Depot", "Harbour", stops.clone()));
        network.add_route(RouteSummary::new("42", "Metro", "Depot", "Harbour", stops.clone()));
        network.add_route(RouteSummary::new("7", "Metro", "Depot", "Harbour", stops));

        let numbers = network.route_numbers_at_stop("Metro", "Depot");
        assert_eq!(numbers, vec!["42".to_string(), "7".to_string()]);
    }

    #[test]
    fn route_lookup() {
        let mut network = InMemoryNetwork::new();
        network.add_route(RouteSummary::new(
            "42",
            "Metro",
            "Depot",
            "Harbour",
            vec!["Depot".to_string(), "Harbour".to_string()],
        ));

        assert!(network.route_by_number("Metro", "42").is_some());
        assert!(network.route_by_number("Metro", "99").is_none());
        assert!(network.route_by_number("Rival", "42").is_none());
    }

    #[test]
    fn nearest_stop_resolution() {
        let mut network = InMemoryNetwork::new();
        network.add_stop(StopLocation::new("Depot", "Metro", HashMap::new()));
        network.add_address("Metro", "1 Mill Lane", "Depot", 7);

        let found = network.nearest_stop("Metro", "1 Mill Lane").unwrap();
        assert_eq!(found.stop.name, "Depot");
        assert_eq!(found.walk_minutes, 7);

        // Unknown address is a normal empty outcome
        assert!(network.nearest_stop("Metro", "nowhere at all").is_none());
    }

    #[test]
    fn loads_fixture_from_file() {
        let fixture = serde_json::json!({
            "trips": [{
                "company": "Metro",
                "route_number": "42",
                "journey_number": 1,
                "stop_name": "Depot",
                "destination": "Harbour",
                "arrival": "10:00",
                "departure": "10:01",
                "valid_from": "2024-01-01",
                "valid_to": "2024-12-31",
                "pattern": {
                    "weekly_days": ["Mon", "Tue", "Wed", "Thu", "Fri"],
                    "added_dates": [],
                    "disrupted_dates": []
                }
            }],
            "routes": [{
                "route_number": "42",
                "company": "Metro",
                "start_stop": "Depot",
                "end_stop": "Harbour",
                "stops": ["Depot", "Harbour"]
            }],
            "stops": [{"name": "Depot", "company": "Metro", "distances": {}}],
            "addresses": [{
                "company": "Metro",
                "address": "1 Mill Lane",
                "stop": "Depot",
                "walk_minutes": 7
            }]
        });

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", fixture).unwrap();

        let network = InMemoryNetwork::from_json_file(file.path()).unwrap();
        assert_eq!(network.trip_count(), 1);
        assert_eq!(network.trips_at_stop("Metro", "Depot").len(), 1);
        assert_eq!(network.route_numbers_at_stop("Metro", "Harbour"), vec!["42"]);
        assert!(network.nearest_stop("Metro", "1 Mill Lane").is_some());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let network = InMemoryNetwork::from_json("{}").unwrap();
        assert_eq!(network.trip_count(), 0);
    }

    #[test]
    fn malformed_fixture_is_an_error() {
        assert!(InMemoryNetwork::from_json("not json").is_err());
        assert!(InMemoryNetwork::from_json_file("/no/such/file.json").is_err());
    }
}
