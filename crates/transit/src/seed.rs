//! Demo network seed data.
//!
//! A small fictional city network: three routes, twelve stops, four
//! vehicles. Used by the demo binary and the end-to-end tests.

use chrono::{DateTime, NaiveTime, Utc};
use geo::Point;

use crate::identifiers::*;
use crate::models::{Facility, Occupancy, Route, Schedule, Stop, Vehicle};
use crate::store::SeedData;

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("seed departure time in range")
}

fn route(
    id: &str,
    name: &str,
    color: &str,
    stops: &[&str],
    weekday: Vec<NaiveTime>,
    weekend: Vec<NaiveTime>,
) -> Route {
    Route {
        id: RouteIdentifier::new(id),
        name: name.into(),
        color: color.into(),
        stops: stops.iter().map(StopIdentifier::new).collect(),
        schedule: Schedule::new(weekday, weekend),
        is_active: true,
    }
}

fn stop(id: &str, name: &str, lat: f64, lng: f64, routes: &[&str], facilities: &[Facility]) -> Stop {
    Stop {
        id: StopIdentifier::new(id),
        name: name.into(),
        location: Point::new(lng, lat),
        routes: routes.iter().map(RouteIdentifier::new).collect(),
        facilities: facilities.to_vec(),
    }
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    route_id: &str,
    lat: f64,
    lng: f64,
    speed_kmh: f64,
    heading_degrees: f64,
    next_stop: &str,
    occupancy: Occupancy,
    now: DateTime<Utc>,
) -> Vehicle {
    Vehicle {
        id: VehicleIdentifier::new(id),
        route_id: RouteIdentifier::new(route_id),
        location: Point::new(lng, lat),
        speed_kmh,
        heading_degrees,
        next_stop_id: Some(StopIdentifier::new(next_stop)),
        occupancy,
        is_active: true,
        last_updated: now,
    }
}

/// The demo dataset. `now` becomes every vehicle's initial update time.
pub fn demo(now: DateTime<Utc>) -> SeedData {
    use Facility::*;

    let routes = vec![
        route(
            "route-1",
            "City Center - Airport",
            "#3B82F6",
            &["stop-1", "stop-2", "stop-3", "stop-4", "stop-5"],
            vec![
                hm(6, 0),
                hm(6, 30),
                hm(7, 0),
                hm(7, 30),
                hm(8, 0),
                hm(8, 30),
                hm(9, 0),
            ],
            vec![hm(7, 0), hm(8, 0), hm(9, 0), hm(10, 0), hm(11, 0)],
        ),
        route(
            "route-2",
            "University - Mall",
            "#10B981",
            &["stop-2", "stop-6", "stop-7", "stop-8", "stop-9"],
            vec![
                hm(6, 15),
                hm(6, 45),
                hm(7, 15),
                hm(7, 45),
                hm(8, 15),
                hm(8, 45),
                hm(9, 15),
            ],
            vec![hm(8, 0), hm(9, 0), hm(10, 0), hm(11, 0), hm(12, 0)],
        ),
        route(
            "route-3",
            "Hospital - Station",
            "#F59E0B",
            &["stop-3", "stop-10", "stop-11", "stop-12", "stop-1"],
            vec![hm(6, 0), hm(7, 0), hm(8, 0), hm(9, 0), hm(10, 0), hm(11, 0)],
            vec![hm(8, 0), hm(10, 0), hm(12, 0), hm(14, 0), hm(16, 0)],
        ),
    ];

    let stops = vec![
        stop(
            "stop-1",
            "Central Station",
            40.7128,
            -74.0060,
            &["route-1", "route-3"],
            &[Shelter, Bench, Lighting],
        ),
        stop(
            "stop-2",
            "City Hall",
            40.7589,
            -73.9851,
            &["route-1", "route-2"],
            &[Shelter, DigitalDisplay],
        ),
        stop(
            "stop-3",
            "Main Hospital",
            40.7505,
            -73.9934,
            &["route-1", "route-3"],
            &[Shelter, Bench, WheelchairAccess],
        ),
        stop(
            "stop-4",
            "Shopping District",
            40.7614,
            -73.9776,
            &["route-1"],
            &[Shelter, Bench],
        ),
        stop(
            "stop-5",
            "Airport Terminal",
            40.7769,
            -73.8740,
            &["route-1"],
            &[Shelter, DigitalDisplay, Wifi],
        ),
        stop(
            "stop-6",
            "University Campus",
            40.7282,
            -73.9942,
            &["route-2"],
            &[Shelter, Bench, BikeRack],
        ),
        stop(
            "stop-7",
            "Library Square",
            40.7549,
            -73.9840,
            &["route-2"],
            &[Shelter, Lighting],
        ),
        stop(
            "stop-8",
            "Sports Complex",
            40.7682,
            -73.9776,
            &["route-2"],
            &[Shelter, Bench, WheelchairAccess],
        ),
        stop(
            "stop-9",
            "Grand Mall",
            40.7831,
            -73.9712,
            &["route-2"],
            &[Shelter, DigitalDisplay, Wifi],
        ),
        stop(
            "stop-10",
            "Medical Center",
            40.7449,
            -73.9964,
            &["route-3"],
            &[Shelter, Bench, WheelchairAccess],
        ),
        stop(
            "stop-11",
            "Park Avenue",
            40.7505,
            -73.9851,
            &["route-3"],
            &[Shelter, Bench],
        ),
        stop(
            "stop-12",
            "Business District",
            40.7282,
            -73.9776,
            &["route-3"],
            &[Shelter, DigitalDisplay],
        ),
    ];

    let vehicles = vec![
        vehicle(
            "bus-1", "route-1", 40.7128, -74.0060, 25.0, 45.0, "stop-2",
            Occupancy::Medium, now,
        ),
        vehicle(
            "bus-2", "route-1", 40.7614, -73.9776, 30.0, 90.0, "stop-5",
            Occupancy::Low, now,
        ),
        vehicle(
            "bus-3", "route-2", 40.7282, -73.9942, 20.0, 180.0, "stop-7",
            Occupancy::High, now,
        ),
        vehicle(
            "bus-4", "route-3", 40.7505, -73.9934, 15.0, 270.0, "stop-11",
            Occupancy::Medium, now,
        ),
    ];

    SeedData {
        routes,
        stops,
        vehicles,
    }
}
