//! Metro timetable server.
//!
//! A web service that answers: "when is the next train at this station,
//! and is anything wrong with its lines?" - resolving spoken station
//! names against live WMATA reference data, merging predictions across
//! paired platforms, and filtering the incident feed down to the lines
//! that matter.

pub mod board;
pub mod domain;
pub mod web;
pub mod wmata;
