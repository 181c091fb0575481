//! # bus-pulse-transit
//!
//! Data model and storage seams for the bus-pulse tracker.
//!
//! ## Features
//!
//! - **Typed identifiers**: cheap-to-clone `Arc<str>` newtypes per entity
//! - **Injected storage**: simulation code works against `RecordStore`
//!   trait objects, never a concrete persistence engine
//! - **Geodesy**: haversine distances plus an R-tree stop index
//! - **Schedules**: weekday/weekend departure timetables
//!
//! ## Example
//!
//! ```
//! use bus_pulse_transit::prelude::*;
//! use chrono::TimeZone;
//!
//! // Seed the in-memory stores with the demo network
//! let now = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
//! let stores = Stores::seeded(bus_pulse_transit::seed::demo(now)).unwrap();
//!
//! let stop = stores.stops.get(&StopIdentifier::new("stop-1")).unwrap();
//! assert_eq!(&*stop.name, "Central Station");
//!
//! // Distance from Central Station to City Hall is about 5.4 km
//! let city_hall = stores.stops.get(&StopIdentifier::new("stop-2")).unwrap();
//! let km = haversine_km(stop.location, city_hall.location);
//! assert!(km > 5.0 && km < 6.0);
//! ```

pub mod identifiers;
pub mod models;
pub mod seed;
pub mod spatial;
pub mod store;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{
        Arrival, Facility, Occupancy, Result, Route, Schedule, Stop, TrackerError, Vehicle,
    };
    pub use crate::spatial::{haversine_km, StopIndex};
    pub use crate::store::{MemoryStore, Record, RecordStore, SeedData, Stores};
}

pub use prelude::*;
