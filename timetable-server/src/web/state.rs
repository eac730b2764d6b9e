//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedTimetable;
use crate::planner::PlannerConfig;
use crate::store::InMemoryNetwork;

/// Shared application state.
///
/// The network doubles as route graph and address resolver; timetable reads
/// go through the cache.
#[derive(Clone)]
pub struct AppState {
    /// The loaded network (route graph and address resolver).
    pub network: Arc<InMemoryNetwork>,

    /// Cached timetable reads over the same network.
    pub timetable: Arc<CachedTimetable<InMemoryNetwork>>,

    /// Planner configuration.
    pub config: Arc<PlannerConfig>,
}

impl AppState {
    /// Wire up state around a loaded network.
    pub fn new(
        network: Arc<InMemoryNetwork>,
        timetable: CachedTimetable<InMemoryNetwork>,
        config: PlannerConfig,
    ) -> Self {
        Self {
            network,
            timetable: Arc::new(timetable),
            config: Arc::new(config),
        }
    }
}
