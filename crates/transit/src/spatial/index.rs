//! R-tree index over stop locations.
//!
//! Queries run in two stages: a fast Euclidean pre-filter in degree
//! space inside the R-tree, then an exact haversine check on the
//! survivors. Stops only change through out-of-band editing, so the
//! index is built from a snapshot and rebuilt when the roster changes.

use std::sync::Arc;

use geo::Point;
use rstar::{PointDistance, RTree, RTreeObject, AABB};

use crate::models::Stop;
use crate::spatial::queries::{haversine_km, km_to_degrees_approx};

// Inflates the degree-space search radius to cover longitude compression
// away from the equator. Sufficient below ~48 degrees latitude.
const PREFILTER_MARGIN: f64 = 1.5;

#[derive(Clone)]
pub struct StopNode {
    pub stop: Arc<Stop>,
    point: [f64; 2],
}

impl StopNode {
    pub fn new(stop: Arc<Stop>) -> Self {
        let point = [stop.location.x(), stop.location.y()];
        Self { stop, point }
    }
}

impl RTreeObject for StopNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for StopNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

/// Spatial index over a snapshot of stops.
#[derive(Clone)]
pub struct StopIndex {
    tree: RTree<StopNode>,
}

impl StopIndex {
    pub fn build(stops: impl IntoIterator<Item = Stop>) -> Self {
        let nodes = stops
            .into_iter()
            .map(|stop| StopNode::new(Arc::new(stop)))
            .collect();
        Self {
            tree: RTree::bulk_load(nodes),
        }
    }

    /// Stops within `radius_km` of a point.
    pub fn stops_near(&self, point: Point, radius_km: f64) -> Vec<Arc<Stop>> {
        if radius_km <= 0.0 || !radius_km.is_finite() {
            return Vec::new();
        }

        let radius_deg = km_to_degrees_approx(radius_km) * PREFILTER_MARGIN;
        self.tree
            .locate_within_distance([point.x(), point.y()], radius_deg * radius_deg)
            .filter(|node| haversine_km(point, node.stop.location) <= radius_km)
            .map(|node| node.stop.clone())
            .collect()
    }

    /// The closest stop to a point, if the index is non-empty.
    pub fn nearest(&self, point: Point) -> Option<Arc<Stop>> {
        self.tree
            .nearest_neighbor(&[point.x(), point.y()])
            .map(|node| node.stop.clone())
    }

    /// The `n` closest stops to a point, nearest first.
    pub fn nearest_n(&self, point: Point, n: usize) -> Vec<Arc<Stop>> {
        self.tree
            .nearest_neighbor_iter(&[point.x(), point.y()])
            .take(n)
            .map(|node| node.stop.clone())
            .collect()
    }
}
