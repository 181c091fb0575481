//! Typed record storage.
//!
//! The simulation core never talks to a persistence engine directly; it
//! is handed `RecordStore` implementations and works against those. The
//! bundled implementation is in-memory, but anything honoring
//! replace-by-id and insertion-ordered listing can be substituted.

pub mod memory;

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

use crate::identifiers::*;
use crate::models::{Result, Route, Stop, TrackerError, Vehicle};

pub use memory::MemoryStore;

/// A storable record with a stable identity.
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Clone + Eq + Hash + Display + Send + Sync;

    fn id(&self) -> &Self::Id;
}

impl Record for Vehicle {
    type Id = VehicleIdentifier;

    fn id(&self) -> &VehicleIdentifier {
        &self.id
    }
}

impl Record for Route {
    type Id = RouteIdentifier;

    fn id(&self) -> &RouteIdentifier {
        &self.id
    }
}

impl Record for Stop {
    type Id = StopIdentifier;

    fn id(&self) -> &StopIdentifier {
        &self.id
    }
}

/// A typed collection of records keyed by id.
///
/// `list` returns records in insertion order; `put` replaces in place
/// without disturbing that order. Lookups on absent ids are not errors.
pub trait RecordStore<T: Record>: Send + Sync {
    fn get(&self, id: &T::Id) -> Option<T>;

    fn list(&self) -> Vec<T>;

    /// Insert or replace by id.
    fn put(&self, record: T);

    /// Remove by id. Returns whether a record was present.
    fn delete(&self, id: &T::Id) -> bool;
}

/// The store bundle handed to the simulation core.
///
/// Cheap to clone; all members are shared handles.
#[derive(Clone)]
pub struct Stores {
    pub vehicles: Arc<dyn RecordStore<Vehicle>>,
    pub routes: Arc<dyn RecordStore<Route>>,
    pub stops: Arc<dyn RecordStore<Stop>>,
}

/// Initial dataset for [`Stores::seeded`].
#[derive(Clone, Debug, Default)]
pub struct SeedData {
    pub routes: Vec<Route>,
    pub stops: Vec<Stop>,
    pub vehicles: Vec<Vehicle>,
}

impl Stores {
    /// Empty in-memory stores.
    pub fn in_memory() -> Self {
        Self {
            vehicles: Arc::new(MemoryStore::new()),
            routes: Arc::new(MemoryStore::new()),
            stops: Arc::new(MemoryStore::new()),
        }
    }

    /// In-memory stores initialized from a seed dataset.
    ///
    /// Rejects the whole dataset if any cross-reference dangles: every
    /// vehicle's route, every stop's routes and every route's stops must
    /// resolve within the seed.
    pub fn seeded(seed: SeedData) -> Result<Self> {
        let stores = Self::in_memory();
        stores.load(seed)?;
        Ok(stores)
    }

    /// Load a seed dataset into existing stores, validating references.
    pub fn load(&self, seed: SeedData) -> Result<()> {
        let route_ids: HashSet<&RouteIdentifier> = seed.routes.iter().map(|r| &r.id).collect();
        let stop_ids: HashSet<&StopIdentifier> = seed.stops.iter().map(|s| &s.id).collect();

        for route in &seed.routes {
            if let Some(missing) = route.stops.iter().find(|id| !stop_ids.contains(id)) {
                return Err(TrackerError::StopNotFound(missing.clone()));
            }
        }
        for stop in &seed.stops {
            if let Some(missing) = stop.routes.iter().find(|id| !route_ids.contains(id)) {
                return Err(TrackerError::RouteNotFound(missing.clone()));
            }
        }
        for vehicle in &seed.vehicles {
            if !route_ids.contains(&vehicle.route_id) {
                return Err(TrackerError::RouteNotFound(vehicle.route_id.clone()));
            }
        }

        for route in seed.routes {
            self.routes.put(route);
        }
        for stop in seed.stops {
            self.stops.put(stop);
        }
        for vehicle in seed.vehicles {
            self.vehicles.put(vehicle);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::TimeZone;

    fn now() -> chrono::DateTime<chrono::Utc> {
        chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_seeded_demo_network() {
        let stores = Stores::seeded(seed::demo(now())).unwrap();

        assert_eq!(stores.routes.list().len(), 3);
        assert_eq!(stores.stops.list().len(), 12);
        assert_eq!(stores.vehicles.list().len(), 4);

        let stop = stores.stops.get(&StopIdentifier::new("stop-1")).unwrap();
        assert_eq!(&*stop.name, "Central Station");
        assert_eq!(stop.routes.len(), 2);
    }

    #[test]
    fn test_seed_rejects_dangling_vehicle_route() {
        let mut seed = seed::demo(now());
        seed.vehicles[0].route_id = RouteIdentifier::new("route-99");

        match Stores::seeded(seed) {
            Err(TrackerError::RouteNotFound(id)) => assert_eq!(id.as_str(), "route-99"),
            Err(other) => panic!("expected RouteNotFound, got {other}"),
            Ok(_) => panic!("seed with dangling route reference accepted"),
        }
    }

    #[test]
    fn test_seed_rejects_dangling_stop_reference() {
        let mut seed = seed::demo(now());
        seed.routes[0].stops.push(StopIdentifier::new("stop-99"));

        assert!(matches!(
            Stores::seeded(seed),
            Err(TrackerError::StopNotFound(_))
        ));
    }
}
