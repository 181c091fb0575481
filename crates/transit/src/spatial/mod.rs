//! Geodesic distance and spatial lookup.

pub mod index;
pub mod queries;

pub use index::StopIndex;
pub use queries::{haversine_km, EARTH_RADIUS_KM};
