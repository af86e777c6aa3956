//! Timetable aggregation pipeline.
//!
//! This module implements the core query flow: resolve a free-text
//! station name against the reference feed, merge arrival predictions
//! across a station's platforms, and attach the incidents relevant to
//! its lines.

pub mod arrivals;
pub mod incidents;
pub mod matching;

mod config;
mod timetable;


pub use config::{BoardConfig, DEFAULT_FUZZY_THRESHOLD};
pub use timetable::{
    Lookup, StationTimetable, StopTimetable, TimetableService, TransitFeed,
};
