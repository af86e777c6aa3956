//! Domain types for the metro timetable server.
//!
//! This module contains the validated identifier types used to key
//! upstream feed requests. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod station;
mod stop;

pub use station::{InvalidStationCode, StationCode};
pub use stop::{InvalidStopId, StopId};
