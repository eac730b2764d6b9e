//! HTTP route handlers.
//!
//! A thin JSON surface over the query engine and the planner. Wall-clock
//! defaults (today's date, the current time of day) are applied here so the
//! core stays a pure function of its arguments.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDate, Timelike};
use tower_http::trace::TraceLayer;

use crate::domain::ClockTime;
use crate::planner::JourneyPlanner;
use crate::query::TimetableQuery;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/departures", get(departures))
        .route("/arrivals", get(arrivals))
        .route("/day", get(day))
        .route("/journey/plan", post(plan_journey))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Error response for malformed requests.
///
/// Malformed times and dates are the caller's mistake and map to 400; empty
/// results are not errors and never arrive here.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct AppError {
    message: String,
}

impl AppError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.message });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Parse an optional HH:MM parameter, defaulting to the current time of day.
fn time_or_now(param: Option<&str>) -> Result<ClockTime, AppError> {
    match param {
        Some(s) => ClockTime::parse_hhmm(s)
            .map_err(|e| AppError::bad_request(format!("invalid time {s:?}: {e}"))),
        None => {
            let now = Local::now().time();
            ClockTime::from_hm(now.hour(), now.minute())
                .map_err(|e| AppError::bad_request(e.to_string()))
        }
    }
}

/// Parse an optional yyyy-MM-dd parameter, defaulting to today.
fn date_or_today(param: Option<&str>) -> Result<NaiveDate, AppError> {
    match param {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| AppError::bad_request(format!("invalid date {s:?}: {e}"))),
        None => Ok(Local::now().date_naive()),
    }
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Next departures from a stop.
async fn departures(
    State(state): State<AppState>,
    Query(req): Query<BoardRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    let from = time_or_now(req.time.as_deref())?;
    let today = Local::now().date_naive();

    let query = TimetableQuery::new(&*state.timetable);
    let trips = query.next_departures(&req.company, &req.stop, today, from);

    Ok(Json(BoardResponse {
        trips: trips.iter().map(TripResult::from).collect(),
    }))
}

/// Next arrivals at a stop.
async fn arrivals(
    State(state): State<AppState>,
    Query(req): Query<BoardRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    let from = time_or_now(req.time.as_deref())?;
    let today = Local::now().date_naive();

    let query = TimetableQuery::new(&*state.timetable);
    let trips = query.next_arrivals(&req.company, &req.stop, today, from);

    Ok(Json(BoardResponse {
        trips: trips.iter().map(TripResult::from).collect(),
    }))
}

/// Everything running at a stop on one calendar date.
async fn day(
    State(state): State<AppState>,
    Query(req): Query<DayRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    let date = date_or_today(req.date.as_deref())?;

    let query = TimetableQuery::new(&*state.timetable);
    let trips = query.trips_on_date(&req.company, &req.stop, date);

    Ok(Json(BoardResponse {
        trips: trips.iter().map(TripResult::from).collect(),
    }))
}

/// Plan a journey between two places.
async fn plan_journey(
    State(state): State<AppState>,
    Json(req): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let depart_at = time_or_now(req.depart_at.as_deref())?;
    let today = Local::now().date_naive();

    let planner = JourneyPlanner::new(
        &*state.timetable,
        &*state.network,
        &*state.network,
        &state.config,
    );
    let instructions = planner.plan(&req.company, &req.from, &req.to, today, depart_at);

    tracing::debug!(
        company = %req.company,
        from = %req.from,
        to = %req.to,
        legs = instructions.len(),
        "journey planned"
    );

    Ok(Json(PlanResponse {
        instructions: instructions.iter().map(InstructionResult::from).collect(),
    }))
}
