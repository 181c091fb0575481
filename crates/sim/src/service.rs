//! The tick driver.
//!
//! One tick advances every vehicle, then recomputes arrivals for every
//! stop, and packages both into a snapshot for presentation layers.
//! Phases run sequentially; the stores are the only shared state.

use std::collections::HashMap;
use std::time::Duration;

use bus_pulse_transit::prelude::*;
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::broadcast;

use crate::arrivals::ArrivalEstimator;
use crate::position::PositionSimulator;

/// One tick's worth of tracking state.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// The full fleet after the position phase, in store order.
    pub vehicles: Vec<Vehicle>,
    /// Predicted arrivals per stop, soonest first.
    pub arrivals: HashMap<StopIdentifier, Vec<Arrival>>,
    pub generated_at: DateTime<Utc>,
}

/// Owns the simulation cycle: stores, simulator, estimator and the rng.
pub struct TrackingService {
    stores: Stores,
    simulator: PositionSimulator,
    estimator: ArrivalEstimator,
    rng: StdRng,
}

impl TrackingService {
    pub fn new(stores: Stores) -> Self {
        Self::with_rng(stores, StdRng::from_os_rng())
    }

    /// Deterministic construction for tests and replays.
    pub fn with_rng(stores: Stores, rng: StdRng) -> Self {
        Self {
            stores,
            simulator: PositionSimulator::default(),
            estimator: ArrivalEstimator,
            rng,
        }
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    /// Run one simulation cycle against the wall clock.
    pub fn tick(&mut self) -> Snapshot {
        self.tick_at(Utc::now())
    }

    /// Run one simulation cycle at an explicit instant.
    pub fn tick_at(&mut self, now: DateTime<Utc>) -> Snapshot {
        let vehicles = self.simulator.advance_all(&self.stores, now, &mut self.rng);

        let arrivals = self
            .stores
            .stops
            .list()
            .into_iter()
            .map(|stop| {
                let predictions =
                    self.estimator
                        .arrivals_for_stop(&self.stores, &stop.id, now, &mut self.rng);
                (stop.id, predictions)
            })
            .collect();

        Snapshot {
            vehicles,
            arrivals,
            generated_at: now,
        }
    }

    /// Tick on a fixed period forever, publishing snapshots.
    ///
    /// A failed send only means nobody is subscribed right now; the loop
    /// keeps going. Cancellation is dropping the task.
    pub async fn run(mut self, period: Duration, tx: broadcast::Sender<Snapshot>) {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            let snapshot = self.tick();
            tracing::debug!(
                vehicles = snapshot.vehicles.len(),
                stops = snapshot.arrivals.len(),
                "tick complete"
            );
            let _ = tx.send(snapshot);
        }
    }
}
