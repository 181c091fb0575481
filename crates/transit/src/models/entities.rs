//! Core entity records.
//!
//! These are plain value types: the simulation reads them out of a store,
//! derives replacements and writes them back. Locations are `geo::Point`
//! with x = longitude and y = latitude, WGS-84 degrees.

use chrono::{DateTime, Utc};
use geo::Point;
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::schedule::Schedule;
use crate::models::types::{Facility, Occupancy};

/// A tracked vehicle on a route.
#[derive(Clone, Debug)]
pub struct Vehicle {
    pub id: VehicleIdentifier,
    /// Must reference an existing route; enforced when seeding stores.
    pub route_id: RouteIdentifier,
    pub location: Point,
    /// km/h. The position simulator keeps this within its clamp range.
    pub speed_kmh: f64,
    /// Degrees clockwise, 0-360. Movement treats this as a planar angle.
    pub heading_degrees: f64,
    pub next_stop_id: Option<StopIdentifier>,
    pub occupancy: Occupancy,
    pub is_active: bool,
    pub last_updated: DateTime<Utc>,
}

/// A transit route: an ordered stop sequence plus its timetable.
#[derive(Clone, Debug)]
pub struct Route {
    pub id: RouteIdentifier,
    pub name: Arc<str>,
    /// Display color, hex RGB (e.g. "#3B82F6").
    pub color: Arc<str>,
    /// Stop ids in travel order.
    pub stops: Vec<StopIdentifier>,
    pub schedule: Schedule,
    pub is_active: bool,
}

/// A boarding location served by one or more routes.
#[derive(Clone, Debug)]
pub struct Stop {
    pub id: StopIdentifier,
    pub name: Arc<str>,
    pub location: Point,
    /// Routes serving this stop. Order is preserved: arrival estimation
    /// walks routes in this order and ties keep that order.
    pub routes: Vec<RouteIdentifier>,
    pub facilities: Vec<Facility>,
}

/// A predicted arrival of a vehicle at a stop.
///
/// Derived and ephemeral: recomputed from scratch on every estimation
/// pass, never stored. Identity is the (stop, vehicle) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrival {
    pub stop_id: StopIdentifier,
    pub vehicle_id: VehicleIdentifier,
    pub route_id: RouteIdentifier,
    pub estimated_time: DateTime<Utc>,
    /// Signed schedule deviation in minutes. Synthetic signal, not
    /// derived from the estimate itself.
    pub delay_minutes: i32,
    /// In [0, 1].
    pub confidence: f64,
}
