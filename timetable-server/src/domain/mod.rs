//! Domain types for the timetable engine.
//!
//! Values are validated at construction time and immutable afterwards;
//! code that receives these types can trust their invariants.

mod calendar;
mod instruction;
mod route;
mod stop;
mod time;
mod trip;

pub use calendar::OperatingPattern;
pub use instruction::{InstructionKind, JourneyInstruction};
pub use route::RouteSummary;
pub use stop::{NearestStop, StopLocation};
pub use time::{ClockTime, TimeError};
pub use trip::ScheduledTrip;
