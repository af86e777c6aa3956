//! WMATA API client.
//!
//! This module provides HTTP clients for the WMATA feeds the timetable
//! pipeline consumes: the rail station reference list, per-platform
//! arrival predictions, the incident feeds, and next-bus predictions.
//!
//! Key characteristics of the feeds:
//! - Predictions are **ephemeral** - each response is a live snapshot
//!   keyed by platform or stop, with no pagination or history
//! - Rail minutes are strings ("BRD", "ARR", "5"); bus minutes are
//!   numeric
//! - Field names are PascalCase throughout

mod client;
mod error;
mod mock;
mod types;

pub use client::{WmataClient, WmataConfig};
pub use error::WmataError;
pub use mock::MockWmataClient;
pub use types::{
    BusIncident, BusIncidentsResponse, BusPrediction, PredictionsResponse, RailIncident,
    RailIncidentsResponse, RailPrediction, Station, StationsResponse, StopArrivals,
};
