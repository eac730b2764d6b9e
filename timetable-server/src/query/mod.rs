//! Stop-time queries: departure/arrival boards and full-day listings.

mod board;
mod day;

pub use board::{MAX_BOARD_RESULTS, TimetableQuery};
