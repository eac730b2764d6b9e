//! Journey planning.

mod config;
mod plan;

pub use config::PlannerConfig;
pub use plan::JourneyPlanner;
