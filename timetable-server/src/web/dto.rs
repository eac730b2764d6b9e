//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{InstructionKind, JourneyInstruction, ScheduledTrip};

/// Query parameters for the board and day endpoints.
#[derive(Debug, Deserialize)]
pub struct BoardRequest {
    /// Operating company.
    pub company: String,

    /// Stop name.
    pub stop: String,

    /// Time in HH:MM format (defaults to now).
    pub time: Option<String>,
}

/// Query parameters for the full-day endpoint.
#[derive(Debug, Deserialize)]
pub struct DayRequest {
    /// Operating company.
    pub company: String,

    /// Stop name.
    pub stop: String,

    /// Date in yyyy-MM-dd format (defaults to today).
    pub date: Option<String>,
}

/// One trip on a board or day listing.
#[derive(Debug, Serialize)]
pub struct TripResult {
    /// Route the trip belongs to.
    pub route_number: String,

    /// Run of the route.
    pub journey_number: u32,

    /// Stop the visit occurs at.
    pub stop: String,

    /// Where the trip terminates.
    pub destination: String,

    /// Arrival time, HH:MM.
    pub arrival: String,

    /// Departure time, HH:MM.
    pub departure: String,
}

impl From<&ScheduledTrip> for TripResult {
    fn from(trip: &ScheduledTrip) -> Self {
        Self {
            route_number: trip.route_number.clone(),
            journey_number: trip.journey_number,
            stop: trip.stop_name.clone(),
            destination: trip.destination.clone(),
            arrival: trip.arrival.to_string(),
            departure: trip.departure.to_string(),
        }
    }
}

/// Response for the board and day endpoints.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Matching trips, at most three for boards.
    pub trips: Vec<TripResult>,
}

/// Request to plan a journey.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// Operating company.
    pub company: String,

    /// Origin stop name or address.
    pub from: String,

    /// Destination stop name or address.
    pub to: String,

    /// Departure time in HH:MM format (defaults to now).
    pub depart_at: Option<String>,
}

/// One leg of a planned journey.
#[derive(Debug, Serialize)]
pub struct InstructionResult {
    /// "walk", "ride" or "change".
    pub kind: &'static str,

    /// Clock time the leg begins, HH:MM.
    pub start_time: String,

    /// Leg duration in minutes.
    pub duration_minutes: i64,

    /// Route ridden; rides only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// Where the leg ends.
    pub destination: String,
}

impl From<&JourneyInstruction> for InstructionResult {
    fn from(leg: &JourneyInstruction) -> Self {
        Self {
            kind: match leg.kind {
                InstructionKind::Walk => "walk",
                InstructionKind::Ride => "ride",
                InstructionKind::Change => "change",
            },
            start_time: leg.start_time.to_string(),
            duration_minutes: leg.duration_minutes,
            route: leg.route.clone(),
            destination: leg.destination.clone(),
        }
    }
}

/// Response for the plan endpoint.
///
/// An empty or partial instruction list means no (complete) journey was
/// found; that is a normal response, not an error.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// Legs of the journey, in travel order.
    pub instructions: Vec<InstructionResult>,
}
