//! Planner configuration.

/// Fixed durations the planner assumes for the legs it emits.
///
/// The timetable records when a vehicle calls at a stop, not how long each
/// ride takes, so the planner works with nominal durations.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Nominal duration of a ride leg (minutes).
    pub ride_mins: i64,

    /// Duration of a change between routes (minutes).
    pub change_mins: i64,
}

impl PlannerConfig {
    /// Create a configuration with the given durations.
    pub fn new(ride_mins: i64, change_mins: i64) -> Self {
        Self {
            ride_mins,
            change_mins,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ride_mins: 15,
            change_mins: 5,
        }
    }
}
