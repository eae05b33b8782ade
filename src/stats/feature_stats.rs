use std::collections::HashMap;

use geo::Area;
use serde::Serialize;

use crate::geofile::feature::Feature;

/// Descriptive aggregate over a feature set. Computed without mutating the
/// features; consumed by reporting alongside the normalization output.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct FeatureStats {
    pub total_features: usize,
    pub polygons: usize,
    pub lines: usize,
    pub points: usize,
    /// Sum of polygon areas, in squared coordinate units.
    pub total_area: f64,
    pub total_vertices: usize,
    /// Mean vertex count over all features, not only the counted geometries.
    pub average_vertices: f64,
    /// Counts per value of the `building` property.
    pub building_types: HashMap<String, usize>,
}

pub fn collect_feature_stats(features: &Vec<Feature>) -> FeatureStats {
    let mut stats = FeatureStats {
        total_features: features.len(),
        ..Default::default()
    };

    for feature in features {
        match &feature.geometry {
            geo::Geometry::Polygon(polygon) => {
                stats.polygons += 1;
                stats.total_area += polygon.unsigned_area();
                stats.total_vertices += polygon.exterior().0.len();
            }
            geo::Geometry::LineString(line) => {
                stats.lines += 1;
                stats.total_vertices += line.0.len();
            }
            geo::Geometry::Point(_) => {
                stats.points += 1;
            }
            _ => {}
        }

        if let Some(building_type) = feature.property_str("building") {
            *stats
                .building_types
                .entry(building_type.to_string())
                .or_insert(0) += 1;
        }
    }

    if stats.total_features > 0 {
        stats.average_vertices = stats.total_vertices as f64 / stats.total_features as f64;
    }
    stats
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use geojson::JsonObject;

    use crate::geofile::feature::Feature;

    use super::collect_feature_stats;

    fn building(building_type: &str, coords: Vec<(f64, f64)>) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("building".to_string(), building_type.into());
        Feature {
            geometry: geo::Geometry::Polygon(geo::Polygon::new(
                geo::LineString::from(coords),
                vec![],
            )),
            properties: Some(properties),
        }
    }

    #[test]
    fn test_stats_over_mixed_features() {
        let features = vec![
            building(
                "house",
                vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)],
            ),
            building(
                "house",
                vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)],
            ),
            building("garage", vec![(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]),
            Feature::from(geo::Geometry::LineString(geo::LineString::from(vec![
                (0.0, 0.0),
                (1.0, 1.0),
                (2.0, 1.0),
            ]))),
            Feature::from(geo::Geometry::Point(geo::Point::new(0.0, 0.0))),
        ];

        let stats = collect_feature_stats(&features);
        assert_eq!(5, stats.total_features);
        assert_eq!(3, stats.polygons);
        assert_eq!(1, stats.lines);
        assert_eq!(1, stats.points);
        // 1 + 4 + 0.5
        assert_abs_diff_eq!(stats.total_area, 5.5, epsilon = 1e-12);
        // Two closed squares (5 each), one closed triangle (4), one line (3).
        assert_eq!(17, stats.total_vertices);
        assert_abs_diff_eq!(stats.average_vertices, 17.0 / 5.0, epsilon = 1e-12);
        assert_eq!(Some(&2), stats.building_types.get("house"));
        assert_eq!(Some(&1), stats.building_types.get("garage"));
    }

    #[test]
    fn test_stats_of_empty_feature_set() {
        let stats = collect_feature_stats(&vec![]);
        assert_eq!(0, stats.total_features);
        assert_eq!(0.0, stats.average_vertices);
        assert!(stats.building_types.is_empty());
    }
}
