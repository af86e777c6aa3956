//! Application state for the web layer.

use std::sync::Arc;

use crate::board::TimetableService;
use crate::wmata::WmataClient;

/// Shared application state.
///
/// Contains the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Timetable aggregation service over the live WMATA client
    pub timetable: Arc<TimetableService<WmataClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(timetable: TimetableService<WmataClient>) -> Self {
        Self {
            timetable: Arc::new(timetable),
        }
    }
}
