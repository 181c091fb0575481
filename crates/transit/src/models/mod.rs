//! Data model for the tracker core.

pub mod entities;
pub mod schedule;
pub mod types;

pub use entities::{Arrival, Route, Stop, Vehicle};
pub use schedule::Schedule;
pub use types::{Facility, Occupancy, Result, TrackerError};
