//! Vehicle position simulation.
//!
//! Each tick nudges an active vehicle a fixed step along its heading
//! with a little uniform jitter, and perturbs its speed within a clamp
//! range. The step treats latitude/longitude degrees as planar units and
//! ignores route geometry; at city scale the drift is small and the
//! behavior matches the system this replaces.

use std::ops::RangeInclusive;

use bus_pulse_transit::prelude::*;
use chrono::{DateTime, Utc};
use geo::Point;
use rand::Rng;

/// Advances vehicle positions and speeds on each tick.
#[derive(Clone, Debug)]
pub struct PositionSimulator {
    /// Distance moved along the heading per tick, in degree units.
    pub step_degrees: f64,
    /// Half-width of the uniform per-axis position noise, in degrees.
    pub jitter_degrees: f64,
    /// Half-width of the uniform speed perturbation, km/h.
    pub speed_jitter_kmh: f64,
    /// Speed clamp applied after perturbation, km/h.
    pub speed_range: RangeInclusive<f64>,
}

impl Default for PositionSimulator {
    fn default() -> Self {
        Self {
            step_degrees: 0.001,
            jitter_degrees: 0.00025,
            speed_jitter_kmh: 5.0,
            speed_range: 10.0..=40.0,
        }
    }
}

impl PositionSimulator {
    /// Advance one vehicle and write the result back to the store.
    ///
    /// Returns `None` when the vehicle or its route is missing (a no-op,
    /// not an error). Inactive vehicles come back unchanged and the
    /// store is left untouched.
    pub fn advance<R: Rng + ?Sized>(
        &self,
        stores: &Stores,
        id: &VehicleIdentifier,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Option<Vehicle> {
        let vehicle = stores.vehicles.get(id)?;
        stores.routes.get(&vehicle.route_id)?;

        if !vehicle.is_active {
            return Some(vehicle);
        }

        let heading = vehicle.heading_degrees.to_radians();
        let lat = vehicle.location.y() + self.step_degrees * heading.cos() + self.jitter(rng);
        let lng = vehicle.location.x() + self.step_degrees * heading.sin() + self.jitter(rng);

        let perturbed = vehicle.speed_kmh
            + rng.random_range(-self.speed_jitter_kmh..=self.speed_jitter_kmh);
        let speed = perturbed.clamp(*self.speed_range.start(), *self.speed_range.end());

        let updated = Vehicle {
            location: Point::new(lng, lat),
            speed_kmh: speed,
            last_updated: now,
            ..vehicle
        };
        stores.vehicles.put(updated.clone());
        Some(updated)
    }

    /// Advance every vehicle in store order.
    ///
    /// Actives are stepped and written back; inactives pass through
    /// unchanged, so the result mirrors the full fleet.
    pub fn advance_all<R: Rng + ?Sized>(
        &self,
        stores: &Stores,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<Vehicle> {
        stores
            .vehicles
            .list()
            .into_iter()
            .map(|vehicle| {
                if vehicle.is_active {
                    self.advance(stores, &vehicle.id, now, rng)
                        .unwrap_or(vehicle)
                } else {
                    vehicle
                }
            })
            .collect()
    }

    fn jitter<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.jitter_degrees == 0.0 {
            return 0.0;
        }
        rng.random_range(-self.jitter_degrees..=self.jitter_degrees)
    }
}
