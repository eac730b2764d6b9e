//! Web layer: HTTP surface over the query engine and planner.

pub mod dto;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
