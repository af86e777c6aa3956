//! Web layer for the metro timetable server.
//!
//! Provides the JSON endpoints the voice integration calls; all
//! response shaping for the voice platform itself happens upstream.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
