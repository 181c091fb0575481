//! # bus-pulse-sim
//!
//! Simulation core for the bus-pulse tracker: advances vehicle positions
//! and derives per-stop arrival estimates on a fixed tick.
//!
//! All randomness flows through an injected [`rand::Rng`] and all clock
//! reads through explicit `now` parameters, so every computation here is
//! reproducible under test.
//!
//! ## Example
//!
//! ```
//! use bus_pulse_sim::TrackingService;
//! use bus_pulse_transit::prelude::*;
//! use chrono::Utc;
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let stores = Stores::seeded(bus_pulse_transit::seed::demo(Utc::now())).unwrap();
//! let mut service = TrackingService::with_rng(stores, StdRng::seed_from_u64(1));
//!
//! let snapshot = service.tick();
//! assert_eq!(snapshot.vehicles.len(), 4);
//! assert!(!snapshot.arrivals[&StopIdentifier::new("stop-1")].is_empty());
//! ```

pub mod arrivals;
pub mod position;
pub mod service;

pub use arrivals::ArrivalEstimator;
pub use position::PositionSimulator;
pub use service::{Snapshot, TrackingService};
