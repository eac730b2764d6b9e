//! Journey composition: walk, ride, change.
//!
//! Builds an ordered list of travel instructions from an origin description
//! to a destination description, allowing at most one change of route. The
//! single-change bound is deliberate: it keeps the search at
//! O(routes at origin x routes at destination) instead of an open-ended
//! graph walk, and the timetable domain rarely needs more than one transfer.
//!
//! Every failure point returns the instructions accumulated so far, which
//! may be empty or incomplete; callers treat a list that does not reach the
//! requested destination as "no journey found". The calendar side of the
//! departure lookups always uses the query-issue date, even once the clock
//! has advanced past midnight; the underlying board query behaves the same
//! way and the two stay consistent.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::{ClockTime, JourneyInstruction};
use crate::query::TimetableQuery;
use crate::store::{NearestStopResolver, RouteGraphLookup, TimetableStore};

use super::config::PlannerConfig;

/// Journey planner over the timetable, route graph and address resolver.
///
/// Stateless; each [`plan`](Self::plan) call is a pure function of its
/// arguments and the stores' contents.
pub struct JourneyPlanner<'a, S, R, N>
where
    S: TimetableStore,
    R: RouteGraphLookup,
    N: NearestStopResolver,
{
    timetable: &'a S,
    routes: &'a R,
    resolver: &'a N,
    config: &'a PlannerConfig,
}

impl<'a, S, R, N> JourneyPlanner<'a, S, R, N>
where
    S: TimetableStore,
    R: RouteGraphLookup,
    N: NearestStopResolver,
{
    /// Create a planner.
    pub fn new(timetable: &'a S, routes: &'a R, resolver: &'a N, config: &'a PlannerConfig) -> Self {
        Self {
            timetable,
            routes,
            resolver,
            config,
        }
    }

    /// Plan a journey from `from_place` to `to_place`, departing `depart_at`.
    ///
    /// Both places may name a stop directly or be free-text addresses; an
    /// address resolves to its nearest stop, with a walking leg at the start
    /// (and, when possible, at the end) of the journey.
    pub fn plan(
        &self,
        company: &str,
        from_place: &str,
        to_place: &str,
        today: NaiveDate,
        depart_at: ClockTime,
    ) -> Vec<JourneyInstruction> {
        let mut legs: Vec<JourneyInstruction> = Vec::new();
        let mut clock = depart_at;

        // Resolve the origin, walking to the nearest stop if needed.
        let origin = if self.is_known_stop(company, from_place) {
            from_place.to_string()
        } else {
            match self.resolver.nearest_stop(company, from_place) {
                Some(found) => {
                    legs.push(JourneyInstruction::walk(
                        clock,
                        found.walk_minutes,
                        found.stop.name.clone(),
                    ));
                    clock = clock.add_minutes(found.walk_minutes);
                    found.stop.name
                }
                None => {
                    tracing::debug!(company, from_place, "origin could not be resolved");
                    return legs;
                }
            }
        };

        // Already there: the origin stop is the requested destination.
        if origin == to_place {
            return legs;
        }

        // Resolve the destination stop, without walking anywhere yet; this
        // only tells us where to change and where the rides should end.
        let dest_stop = if self.is_known_stop(company, to_place) {
            to_place.to_string()
        } else {
            match self.resolver.nearest_stop(company, to_place) {
                Some(found) => found.stop.name,
                None => {
                    tracing::debug!(company, to_place, "destination could not be resolved");
                    return legs;
                }
            }
        };

        let Some(change_stop) = self.determine_change_stop(company, &origin, &dest_stop, today, clock)
        else {
            tracing::debug!(company, %origin, %dest_stop, "no change stop connects the stops");
            return legs;
        };

        let board = TimetableQuery::new(self.timetable);

        // First ride: the earliest upcoming departure from the origin.
        let Some(first) = board
            .next_departures(company, &origin, today, clock)
            .into_iter()
            .next()
        else {
            return legs;
        };
        legs.push(JourneyInstruction::ride(
            first.departure,
            self.config.ride_mins,
            first.route_number.clone(),
            first.destination.clone(),
        ));
        clock = first.departure.add_minutes(self.config.ride_mins);

        // A same-route journey needs no change and no further legs.
        if change_stop == dest_stop {
            return legs;
        }

        legs.push(JourneyInstruction::change(
            clock,
            self.config.change_mins,
            change_stop.clone(),
        ));
        clock = clock.add_minutes(self.config.change_mins);

        // Second ride, from the change stop.
        let Some(second) = board
            .next_departures(company, &change_stop, today, clock)
            .into_iter()
            .next()
        else {
            return legs;
        };
        legs.push(JourneyInstruction::ride(
            second.departure,
            self.config.ride_mins,
            second.route_number.clone(),
            second.destination.clone(),
        ));
        clock = second.departure.add_minutes(self.config.ride_mins);

        // Last-mile walk when the destination stop is not the place asked
        // for. A resolver miss here is not a failure; the leg is omitted.
        if dest_stop != to_place {
            if let Some(found) = self.resolver.nearest_stop(company, to_place) {
                legs.push(JourneyInstruction::walk(clock, found.walk_minutes, to_place));
            }
        }

        legs
    }

    /// A place counts as a known stop when at least one route serves it.
    fn is_known_stop(&self, company: &str, place: &str) -> bool {
        !self.routes.route_numbers_at_stop(company, place).is_empty()
    }

    /// Find the stop at which to change between origin and destination.
    ///
    /// When the two stops share a route the traveler rides through and the
    /// "change stop" is the destination stop itself. Otherwise upcoming
    /// departures from the origin are scanned in time order; the first stop
    /// on a departure's route whose serving routes intersect the
    /// destination's route set is the change point. `None` means no
    /// single-change connection exists.
    fn determine_change_stop(
        &self,
        company: &str,
        origin: &str,
        dest_stop: &str,
        today: NaiveDate,
        clock: ClockTime,
    ) -> Option<String> {
        let origin_routes: HashSet<String> = self
            .routes
            .route_numbers_at_stop(company, origin)
            .into_iter()
            .collect();
        let dest_routes: HashSet<String> = self
            .routes
            .route_numbers_at_stop(company, dest_stop)
            .into_iter()
            .collect();

        if origin_routes.intersection(&dest_routes).next().is_some() {
            return Some(dest_stop.to_string());
        }

        let board = TimetableQuery::new(self.timetable);
        for trip in board.next_departures(company, origin, today, clock) {
            let Some(route) = self.routes.route_by_number(company, &trip.route_number) else {
                continue;
            };
            for stop in &route.stops {
                let serving = self.routes.route_numbers_at_stop(company, stop);
                if serving.iter().any(|r| dest_routes.contains(r)) {
                    return Some(stop.clone());
                }
            }
        }

        None
    }
}
