//! Arrival estimation.
//!
//! For a stop, walks every active vehicle on the routes serving it and
//! turns straight-line haversine distance plus current speed into an
//! ETA. Delay and confidence are synthetic signals drawn from the
//! injected rng; only the estimated time and ordering are deterministic
//! given fixed inputs.

use std::ops::RangeInclusive;

use bus_pulse_transit::prelude::*;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Produces ranked arrival predictions per stop.
#[derive(Clone, Copy, Debug, Default)]
pub struct ArrivalEstimator;

impl ArrivalEstimator {
    /// Synthetic schedule deviation, minutes.
    pub const DELAY_RANGE: RangeInclusive<i32> = -2..=3;
    /// Synthetic prediction confidence.
    pub const CONFIDENCE_RANGE: RangeInclusive<f64> = 0.7..=1.0;
    /// Floor applied to every estimate so an ETA is never zero.
    pub const MIN_ETA_MINUTES: i64 = 1;
    /// Estimates beyond a day are noise, not predictions.
    pub const MAX_ETA_MINUTES: i64 = 24 * 60;

    /// Predicted arrivals for a stop, soonest first.
    ///
    /// Unknown stop ids yield an empty list, never an error. Vehicles
    /// with an unusable speed are skipped rather than reported with a
    /// bogus ETA. The sort is stable, so equal estimates keep
    /// route-then-fleet insertion order.
    pub fn arrivals_for_stop<R: Rng + ?Sized>(
        &self,
        stores: &Stores,
        stop_id: &StopIdentifier,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<Arrival> {
        let Some(stop) = stores.stops.get(stop_id) else {
            return Vec::new();
        };

        let fleet = stores.vehicles.list();
        let mut arrivals = Vec::new();

        for route_id in &stop.routes {
            for vehicle in fleet
                .iter()
                .filter(|v| v.route_id == *route_id && v.is_active)
            {
                let distance_km = haversine_km(vehicle.location, stop.location);
                let Some(minutes) = eta_minutes(distance_km, vehicle.speed_kmh) else {
                    continue;
                };

                arrivals.push(Arrival {
                    stop_id: stop.id.clone(),
                    vehicle_id: vehicle.id.clone(),
                    route_id: vehicle.route_id.clone(),
                    estimated_time: now + Duration::minutes(minutes),
                    delay_minutes: rng.random_range(Self::DELAY_RANGE),
                    confidence: rng.random_range(Self::CONFIDENCE_RANGE),
                });
            }
        }

        arrivals.sort_by_key(|arrival| arrival.estimated_time);
        arrivals
    }
}

/// Minutes to cover `distance_km` at `speed_kmh`, floored at one minute.
///
/// `None` when the speed is zero or negative, the distance is not
/// finite, or the estimate lands past [`ArrivalEstimator::MAX_ETA_MINUTES`];
/// such pairs have no usable ETA. The ceiling also keeps a near-zero
/// speed (writable through the store seam) from producing a timestamp
/// chrono cannot represent.
fn eta_minutes(distance_km: f64, speed_kmh: f64) -> Option<i64> {
    if !(speed_kmh > 0.0) || !distance_km.is_finite() {
        return None;
    }
    let minutes = (distance_km / (speed_kmh / 60.0)).round();
    if minutes > ArrivalEstimator::MAX_ETA_MINUTES as f64 {
        return None;
    }
    Some((minutes as i64).max(ArrivalEstimator::MIN_ETA_MINUTES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use geo::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn demo_stores() -> Stores {
        Stores::seeded(bus_pulse_transit::seed::demo(now())).unwrap()
    }

    fn minutes_out(arrival: &Arrival) -> i64 {
        (arrival.estimated_time - now()).num_minutes()
    }

    #[test]
    fn test_unknown_stop_yields_empty() {
        let estimator = ArrivalEstimator;
        let mut rng = StdRng::seed_from_u64(1);

        let arrivals = estimator.arrivals_for_stop(
            &demo_stores(),
            &StopIdentifier::new("stop-99"),
            now(),
            &mut rng,
        );
        assert!(arrivals.is_empty());
    }

    #[test]
    fn test_eta_floor() {
        assert_eq!(eta_minutes(0.0, 25.0), Some(1));
        assert_eq!(eta_minutes(0.05, 40.0), Some(1));
        assert_eq!(eta_minutes(5.0, 20.0), Some(15));
    }

    #[test]
    fn test_degenerate_speed_has_no_eta() {
        assert_eq!(eta_minutes(3.0, 0.0), None);
        assert_eq!(eta_minutes(3.0, -5.0), None);
        assert_eq!(eta_minutes(f64::NAN, 25.0), None);
    }

    #[test]
    fn test_estimates_past_ceiling_rejected() {
        // A subnormal speed passes a plain positivity check but yields
        // minutes far beyond what a timestamp can absorb.
        assert_eq!(eta_minutes(4.0, 1e-300), None);
        assert_eq!(eta_minutes(1e7, 10.0), None);
        // The day-long boundary itself is still a usable estimate.
        assert_eq!(eta_minutes(360.0, 15.0), Some(24 * 60));
    }

    #[test]
    fn test_crawling_vehicle_excluded_without_panic() {
        let stores = demo_stores();
        let mut crawling = stores.vehicles.get(&VehicleIdentifier::new("bus-4")).unwrap();
        crawling.speed_kmh = 1e-300;
        stores.vehicles.put(crawling);

        let mut rng = StdRng::seed_from_u64(9);
        let arrivals = ArrivalEstimator.arrivals_for_stop(
            &stores,
            &StopIdentifier::new("stop-1"),
            now(),
            &mut rng,
        );
        assert!(arrivals.iter().all(|a| a.vehicle_id.as_str() != "bus-4"));
        assert_eq!(arrivals.len(), 2); // bus-1 and bus-2 still reported
    }

    #[test]
    fn test_zero_speed_vehicle_excluded() {
        let stores = demo_stores();
        let mut stalled = stores.vehicles.get(&VehicleIdentifier::new("bus-1")).unwrap();
        stalled.speed_kmh = 0.0;
        stores.vehicles.put(stalled);

        let mut rng = StdRng::seed_from_u64(2);
        let arrivals = ArrivalEstimator.arrivals_for_stop(
            &stores,
            &StopIdentifier::new("stop-1"),
            now(),
            &mut rng,
        );
        assert!(arrivals.iter().all(|a| a.vehicle_id.as_str() != "bus-1"));
    }

    #[test]
    fn test_inactive_vehicle_excluded() {
        let stores = demo_stores();
        let mut parked = stores.vehicles.get(&VehicleIdentifier::new("bus-4")).unwrap();
        parked.is_active = false;
        stores.vehicles.put(parked);

        let mut rng = StdRng::seed_from_u64(3);
        let arrivals = ArrivalEstimator.arrivals_for_stop(
            &stores,
            &StopIdentifier::new("stop-1"),
            now(),
            &mut rng,
        );
        assert!(arrivals.iter().all(|a| a.vehicle_id.as_str() != "bus-4"));
    }

    #[test]
    fn test_ordering_non_decreasing() {
        let stores = demo_stores();
        let mut rng = StdRng::seed_from_u64(4);

        // stop-1 is served by route-1 (bus-1, bus-2) and route-3 (bus-4).
        let arrivals = ArrivalEstimator.arrivals_for_stop(
            &stores,
            &StopIdentifier::new("stop-1"),
            now(),
            &mut rng,
        );
        assert!(arrivals.len() >= 2);
        for pair in arrivals.windows(2) {
            assert!(pair[0].estimated_time <= pair[1].estimated_time);
        }
    }

    #[test]
    fn test_synthetic_fields_stay_in_range() {
        let stores = demo_stores();
        let mut rng = StdRng::seed_from_u64(5);

        for stop in stores.stops.list() {
            for arrival in
                ArrivalEstimator.arrivals_for_stop(&stores, &stop.id, now(), &mut rng)
            {
                assert!((-2..=3).contains(&arrival.delay_minutes));
                assert!((0.7..=1.0).contains(&arrival.confidence));
            }
        }
    }

    #[test]
    fn test_central_station_scenario() {
        // Exactly two active vehicles: bus-1 sitting on Central Station
        // (route-1) and bus-4 about 4-5 km out on route-3 at 15 km/h.
        let mut seed = bus_pulse_transit::seed::demo(now());
        seed.vehicles.retain(|v| {
            let id = v.id.as_str();
            id == "bus-1" || id == "bus-4"
        });
        let stores = Stores::seeded(seed).unwrap();

        let mut rng = StdRng::seed_from_u64(6);
        let arrivals = ArrivalEstimator.arrivals_for_stop(
            &stores,
            &StopIdentifier::new("stop-1"),
            now(),
            &mut rng,
        );

        assert_eq!(arrivals.len(), 2);
        assert_eq!(arrivals[0].vehicle_id.as_str(), "bus-1");
        assert_eq!(arrivals[0].route_id.as_str(), "route-1");
        assert_eq!(minutes_out(&arrivals[0]), 1);

        assert_eq!(arrivals[1].vehicle_id.as_str(), "bus-4");
        assert_eq!(arrivals[1].route_id.as_str(), "route-3");
        let eta = minutes_out(&arrivals[1]);
        assert!((15..=20).contains(&eta), "unexpected ETA {eta}");
    }

    #[test]
    fn test_duplicate_route_listing_duplicates_entries() {
        // Not validated by the data model: a stop listing the same route
        // twice reports each vehicle twice.
        let stores = demo_stores();
        let mut stop = stores.stops.get(&StopIdentifier::new("stop-4")).unwrap();
        stop.routes.push(RouteIdentifier::new("route-1"));
        stores.stops.put(stop);

        let mut rng = StdRng::seed_from_u64(7);
        let arrivals = ArrivalEstimator.arrivals_for_stop(
            &stores,
            &StopIdentifier::new("stop-4"),
            now(),
            &mut rng,
        );
        let bus_1_entries = arrivals
            .iter()
            .filter(|a| a.vehicle_id.as_str() == "bus-1")
            .count();
        assert_eq!(bus_1_entries, 2);
    }

    #[test]
    fn test_coincident_points_pinned_to_floor() {
        let stores = demo_stores();
        let stop = stores.stops.get(&StopIdentifier::new("stop-1")).unwrap();

        let mut vehicle = stores.vehicles.get(&VehicleIdentifier::new("bus-1")).unwrap();
        vehicle.location = Point::new(stop.location.x(), stop.location.y());
        stores.vehicles.put(vehicle);

        let mut rng = StdRng::seed_from_u64(8);
        let arrivals = ArrivalEstimator.arrivals_for_stop(
            &stores,
            &StopIdentifier::new("stop-1"),
            now(),
            &mut rng,
        );
        let bus_1 = arrivals
            .iter()
            .find(|a| a.vehicle_id.as_str() == "bus-1")
            .unwrap();
        assert_eq!(minutes_out(bus_1), 1);
    }
}
