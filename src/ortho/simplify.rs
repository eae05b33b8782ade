use geo::Simplify;

/// Minimum number of distinct vertices a simplified ring must keep.
const MIN_DISTINCT_VERTICES: usize = 3;

/// Reduce vertex density of a ring with Ramer-Douglas-Peucker, bounded by
/// `tolerance`. The first and last (closing) vertices are always retained.
///
/// A `tolerance` of zero returns the ring unchanged. If simplification would
/// leave fewer than 3 distinct vertices, the original ring is returned
/// instead.
pub fn simplify_ring(ring: &geo::LineString, tolerance: f64) -> geo::LineString {
    if tolerance <= 0.0 {
        return ring.clone();
    }
    let simplified = ring.simplify(&tolerance);
    if distinct_vertex_count(&simplified) < MIN_DISTINCT_VERTICES {
        return ring.clone();
    }
    simplified
}

/// Number of ring vertices, not counting the closing duplicate.
pub fn distinct_vertex_count(ring: &geo::LineString) -> usize {
    let num_coords = ring.0.len();
    if num_coords > 1 && ring.is_closed() {
        num_coords - 1
    } else {
        num_coords
    }
}
