use anyhow::anyhow;
use geo::{Area, BoundingRect, EuclideanLength};

/// Closed rings with more points than this are degraded to their bounding
/// rectangle.
const MAX_SIMPLE_RING_POINTS: usize = 15;
/// Isoperimetric ratio (perimeter squared over area) above which a shape is
/// degraded to its bounding rectangle.
const MAX_ISOPERIMETRIC_RATIO: f64 = 50.0;

/// Whether a polygon is still too irregular for pixel-art styling: too many
/// vertices, or a high perimeter-squared-to-area ratio (elongated or jagged
/// outline).
pub fn is_too_complex(polygon: &geo::Polygon) -> bool {
    if polygon.exterior().0.len() > MAX_SIMPLE_RING_POINTS {
        return true;
    }

    let area = polygon.unsigned_area();
    let perimeter = polygon.exterior().euclidean_length();
    area > 0.0 && perimeter * perimeter / area > MAX_ISOPERIMETRIC_RATIO
}

/// Terminal degradation path: replace the polygon with its axis-aligned
/// bounding rectangle (closed 5-point ring). The result is orthogonal and
/// bounded in vertex count by construction, so no further stages run on it.
pub fn bounding_box_approximation(polygon: &geo::Polygon) -> anyhow::Result<geo::Polygon> {
    polygon
        .bounding_rect()
        .map(|rect| rect.to_polygon())
        .ok_or_else(|| anyhow!("Cannot compute bounding rectangle of an empty polygon"))
}
