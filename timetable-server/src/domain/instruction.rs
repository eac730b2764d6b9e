//! Journey instructions: the legs of a planned journey.

use super::time::ClockTime;

/// What kind of leg an instruction describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    /// Walk to a stop or to the final destination.
    Walk,

    /// Ride a route.
    Ride,

    /// Change routes at a stop.
    Change,
}

/// One leg of a planned journey.
///
/// Instructions are produced fresh per planning request and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct JourneyInstruction {
    /// Leg kind.
    pub kind: InstructionKind,

    /// Clock time the leg begins.
    pub start_time: ClockTime,

    /// Leg duration in minutes.
    pub duration_minutes: i64,

    /// Route ridden; populated for ride legs only.
    pub route: Option<String>,

    /// The stop or place this leg ends at.
    pub destination: String,
}

impl JourneyInstruction {
    /// A walking leg ending at `destination`.
    pub fn walk(start_time: ClockTime, duration_minutes: i64, destination: impl Into<String>) -> Self {
        Self {
            kind: InstructionKind::Walk,
            start_time,
            duration_minutes,
            route: None,
            destination: destination.into(),
        }
    }

    /// A ride on `route` ending at `destination`.
    pub fn ride(
        start_time: ClockTime,
        duration_minutes: i64,
        route: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            kind: InstructionKind::Ride,
            start_time,
            duration_minutes,
            route: Some(route.into()),
            destination: destination.into(),
        }
    }

    /// A change of routes at `at_stop`.
    pub fn change(start_time: ClockTime, duration_minutes: i64, at_stop: impl Into<String>) -> Self {
        Self {
            kind: InstructionKind::Change,
            start_time,
            duration_minutes,
            route: None,
            destination: at_stop.into(),
        }
    }
}
