use super::simplify::distinct_vertex_count;

/// Cap a ring's vertex count by uniform decimation: keep every stride-th
/// vertex with `stride = ceil(distinct / max_vertices)` and re-close the
/// ring. Rings already within the cap are returned unchanged.
///
/// This is lossy and not curvature-aware; the orthogonalizer has already run,
/// so dropped vertices cost detail, not alignment.
pub fn reduce_ring_vertices(ring: &geo::LineString, max_vertices: usize) -> geo::LineString {
    let distinct = distinct_vertex_count(ring);
    if distinct <= max_vertices {
        return ring.clone();
    }

    let stride = (distinct + max_vertices - 1) / max_vertices;
    let mut reduced: Vec<geo::Coord> = ring.0[..distinct]
        .iter()
        .copied()
        .step_by(stride)
        .collect();
    if reduced.last() != reduced.first() {
        if let Some(first) = reduced.first().copied() {
            reduced.push(first);
        }
    }
    geo::LineString::new(reduced)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::reduce_ring_vertices;

    /// Closed ring with `n` distinct vertices spread around a circle.
    fn ring_with_vertices(n: usize) -> geo::LineString {
        let mut coords: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                (theta.cos(), theta.sin())
            })
            .collect();
        coords.push(coords[0]);
        geo::LineString::from(coords)
    }

    #[test]
    fn test_ring_within_cap_is_unchanged() {
        let ring = ring_with_vertices(8);
        assert_eq!(ring, reduce_ring_vertices(&ring, 10));
    }

    #[test]
    fn test_ring_at_exact_cap_is_unchanged() {
        let ring = ring_with_vertices(10);
        assert_eq!(ring, reduce_ring_vertices(&ring, 10));
    }

    #[test]
    fn test_twenty_vertices_reduced_to_at_most_eleven_points() {
        let ring = ring_with_vertices(20);
        let reduced = reduce_ring_vertices(&ring, 10);
        assert!(reduced.0.len() <= 11);
        assert_eq!(reduced.0.first(), reduced.0.last());
    }

    #[rstest]
    #[case(16, 5)]
    #[case(25, 10)]
    #[case(100, 3)]
    #[case(7, 3)]
    fn test_decimation_bound_holds(#[case] vertices: usize, #[case] max_vertices: usize) {
        let reduced = reduce_ring_vertices(&ring_with_vertices(vertices), max_vertices);
        assert!(reduced.0.len() <= max_vertices + 1);
        assert_eq!(reduced.0.first(), reduced.0.last());
    }
}
