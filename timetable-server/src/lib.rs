//! Timetable query and journey-planning engine.
//!
//! Answers two kinds of questions about a scheduled transit network:
//! "what leaves this stop next?" (departure/arrival boards and full-day
//! listings) and "how do I get from A to B?" (walk/ride/change journey
//! instructions with at most one change of route).

pub mod cache;
pub mod domain;
pub mod planner;
pub mod query;
pub mod store;
pub mod web;
