use geo::Coord;

use super::options::NormalizeOptions;

/// Fraction of the grid size below which an edge delta counts as already
/// axis-aligned.
pub const AXIS_ALIGNED_GRID_FACTOR: f64 = 0.1;
/// Angle deviations (degrees) below this are corrected by nudging the vertex;
/// larger ones snap the vertex onto a grid line.
const SMALL_DEVIATION_DEGREES: f64 = 30.0;
/// Scale applied to the summed edge vectors when nudging a vertex.
const NUDGE_FACTOR: f64 = 0.1;
/// Nudge scale when `preserve_shape` is set.
const NUDGE_FACTOR_PRESERVE_SHAPE: f64 = 0.05;

/// Round a coordinate to the nearest grid intersection, per axis.
pub fn snap_to_grid(coord: Coord, grid_size: f64) -> Coord {
    Coord {
        x: (coord.x / grid_size).round() * grid_size,
        y: (coord.y / grid_size).round() * grid_size,
    }
}

/// Normalize a polygon towards rectilinear geometry: snap every vertex to the
/// grid, run one angle-correction sweep, optionally force all edges
/// axis-aligned, and re-close the ring.
///
/// Rings with fewer than 4 points (closing duplicate included) are returned
/// unchanged.
pub fn orthogonalize_polygon(polygon: &geo::Polygon, options: &NormalizeOptions) -> geo::Polygon {
    let coords = &polygon.exterior().0;
    if coords.len() < 4 {
        return polygon.clone();
    }

    // Drop the closing duplicate while correcting vertices.
    let vertices: Vec<Coord> = coords[..coords.len() - 1]
        .iter()
        .map(|coord| snap_to_grid(*coord, options.grid_size))
        .collect();

    let mut orthogonalized = orthogonalize_vertices(vertices, options);

    if let Some(first) = orthogonalized.first().copied() {
        orthogonalized.push(first);
    }
    geo::Polygon::new(geo::LineString::new(orthogonalized), vec![])
}

/// One corrective sweep over the open vertex list, in ring order. Corrections
/// are applied in place, so later vertices see their already-corrected
/// neighbors. Deliberately not iterated to a fixed point.
fn orthogonalize_vertices(vertices: Vec<Coord>, options: &NormalizeOptions) -> Vec<Coord> {
    if vertices.len() < 3 {
        return vertices;
    }

    let mut result = vertices;
    let num_vertices = result.len();
    for i in 0..num_vertices {
        let prev = result[(i + num_vertices - 1) % num_vertices];
        let curr = result[i];
        let next = result[(i + 1) % num_vertices];

        let angle = vertex_angle_degrees(prev, curr, next);
        let target = nearest_right_angle(angle);

        if (angle - target).abs() > options.angle_tolerance {
            result[i] = correct_vertex(prev, curr, next, target - angle, options);
        }
    }

    if options.force_orthogonal {
        force_axis_aligned_edges(&mut result, options.grid_size);
    }
    result
}

/// Interior angle at `curr` between the edge vectors towards `prev` and
/// `next`, in degrees within `[0, 360)`. Left turns increase the angle; right
/// turns are disambiguated by the cross-product sign. A zero-length edge
/// yields 0.
pub fn vertex_angle_degrees(prev: Coord, curr: Coord, next: Coord) -> f64 {
    let v1 = Coord {
        x: prev.x - curr.x,
        y: prev.y - curr.y,
    };
    let v2 = Coord {
        x: next.x - curr.x,
        y: next.y - curr.y,
    };

    if (v1.x == 0.0 && v1.y == 0.0) || (v2.x == 0.0 && v2.y == 0.0) {
        return 0.0;
    }

    let dot = v1.x * v2.x + v1.y * v2.y;
    let cross = v1.x * v2.y - v1.y * v2.x;
    let mut angle = cross.atan2(dot).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

/// Nearest of the four right-angle targets (0, 90, 180, 270 degrees).
pub fn nearest_right_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    if normalized <= 45.0 || normalized > 315.0 {
        0.0
    } else if normalized <= 135.0 {
        90.0
    } else if normalized <= 225.0 {
        180.0
    } else {
        270.0
    }
}

/// Move a vertex towards its right-angle target. Small deviations nudge the
/// vertex along the sum of its adjacent edge vectors and re-snap it to the
/// grid; larger ones snap it onto the nearer of its own grid lines.
fn correct_vertex(
    prev: Coord,
    curr: Coord,
    next: Coord,
    deviation_degrees: f64,
    options: &NormalizeOptions,
) -> Coord {
    if deviation_degrees.abs() < SMALL_DEVIATION_DEGREES {
        let nudge_factor = if options.preserve_shape {
            NUDGE_FACTOR_PRESERVE_SHAPE
        } else {
            NUDGE_FACTOR
        };
        let nudged = Coord {
            x: curr.x + ((prev.x - curr.x) + (next.x - curr.x)) * nudge_factor,
            y: curr.y + ((prev.y - curr.y) + (next.y - curr.y)) * nudge_factor,
        };
        return snap_to_grid(nudged, options.grid_size);
    }
    align_to_nearer_grid_axis(curr, options.grid_size)
}

/// Snap the vertex onto whichever of its own x or y grid lines needs the
/// smaller displacement.
fn align_to_nearer_grid_axis(vertex: Coord, grid_size: f64) -> Coord {
    let snapped_x = (vertex.x / grid_size).round() * grid_size;
    let snapped_y = (vertex.y / grid_size).round() * grid_size;

    if (vertex.x - snapped_x).abs() < (vertex.y - snapped_y).abs() {
        Coord {
            x: snapped_x,
            y: vertex.y,
        }
    } else {
        Coord {
            x: vertex.x,
            y: snapped_y,
        }
    }
}

/// Single forward pass collapsing genuinely diagonal edges onto their
/// dominant axis by moving the following vertex. The closing edge is not
/// revisited, so one residual diagonal can remain.
fn force_axis_aligned_edges(vertices: &mut [Coord], grid_size: f64) {
    let diagonal_threshold = grid_size * AXIS_ALIGNED_GRID_FACTOR;
    for i in 0..vertices.len().saturating_sub(1) {
        let curr = vertices[i];
        let next = vertices[i + 1];

        let dx = (next.x - curr.x).abs();
        let dy = (next.y - curr.y).abs();

        if dx > diagonal_threshold && dy > diagonal_threshold {
            if dx > dy {
                vertices[i + 1] = Coord {
                    x: next.x,
                    y: curr.y,
                };
            } else {
                vertices[i + 1] = Coord {
                    x: curr.x,
                    y: next.y,
                };
            }
        }
    }
}
