use std::time::Duration;

use bus_pulse_sim::{Snapshot, TrackingService};
use bus_pulse_transit::prelude::*;
use chrono::Utc;
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TICK_PERIOD: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bus_pulse=info,bus_pulse_sim=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let seed = bus_pulse_transit::seed::demo(Utc::now());
    let stores = match Stores::seeded(seed) {
        Ok(stores) => stores,
        Err(err) => {
            tracing::error!("seed data rejected: {err}");
            return;
        }
    };

    tracing::info!(
        routes = stores.routes.list().len(),
        stops = stores.stops.list().len(),
        vehicles = stores.vehicles.list().len(),
        "demo network loaded"
    );

    for route in stores.routes.list() {
        match route.schedule.next_departure(Utc::now().naive_utc()) {
            Some(departure) => tracing::info!(
                route = %route.id,
                name = %route.name,
                departure = %departure,
                "next scheduled departure"
            ),
            None => tracing::info!(route = %route.id, "no scheduled departures"),
        }
    }

    let stop_index = StopIndex::build(stores.stops.list());
    let (tx, mut rx) = broadcast::channel(16);
    let ticker = tokio::spawn(TrackingService::new(stores).run(TICK_PERIOD, tx));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            received = rx.recv() => match received {
                Ok(snapshot) => report(&snapshot, &stop_index),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "fell behind the tick stream");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
        }
    }

    ticker.abort();
    tracing::info!("tracker stopped");
}

fn report(snapshot: &Snapshot, stop_index: &StopIndex) {
    for vehicle in &snapshot.vehicles {
        if !vehicle.is_active {
            continue;
        }
        let near = stop_index
            .nearest(vehicle.location)
            .map(|stop| stop.name.to_string())
            .unwrap_or_else(|| "?".to_owned());
        tracing::info!(
            vehicle = %vehicle.id,
            route = %vehicle.route_id,
            lat = vehicle.location.y(),
            lng = vehicle.location.x(),
            speed_kmh = vehicle.speed_kmh,
            occupancy = vehicle.occupancy.as_tag(),
            near = %near,
            "position"
        );
    }

    for (stop_id, arrivals) in &snapshot.arrivals {
        if let Some(next) = arrivals.first() {
            tracing::info!(
                stop = %stop_id,
                vehicle = %next.vehicle_id,
                eta = %next.estimated_time.format("%H:%M"),
                delay_min = next.delay_minutes,
                confidence = next.confidence,
                "next arrival"
            );
        }
    }
}
