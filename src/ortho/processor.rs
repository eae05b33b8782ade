use anyhow::anyhow;
use geo::Area;
use geojson::{JsonObject, JsonValue};
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

use crate::geofile::feature::Feature;

use super::complexity::{bounding_box_approximation, is_too_complex};
use super::options::NormalizeOptions;
use super::orthogonalize::orthogonalize_polygon;
use super::reduce::reduce_ring_vertices;
use super::simplify::{distinct_vertex_count, simplify_ring};

/// Batch-level counts reported alongside the normalized features.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub original_count: usize,
    pub processed_count: usize,
    /// The effective options the batch was processed with.
    pub options: NormalizeOptions,
}

/// Output of [`normalize_features`]: surviving features in input order, plus
/// the batch summary.
#[derive(Debug)]
pub struct NormalizedCollection {
    pub features: Vec<Feature>,
    pub summary: BatchSummary,
}

/// Run the full normalization pipeline over a batch of features.
///
/// Features are processed independently and in parallel; output order matches
/// input order. A feature that fails processing is passed through unmodified
/// (one bad polygon never aborts the batch), while features dropped by the
/// area filter are omitted from the result.
pub fn normalize_features(
    features: Vec<Feature>,
    options: &NormalizeOptions,
) -> anyhow::Result<NormalizedCollection> {
    options.validate()?;

    let original_count = features.len();
    let features: Vec<Feature> = features
        .into_par_iter()
        .progress_count(original_count as u64)
        .filter_map(|feature| match process_feature(&feature, options) {
            Ok(processed) => processed,
            Err(error) => {
                log::warn!("Returning feature unprocessed after error: {}", error);
                Some(feature)
            }
        })
        .collect();

    let summary = BatchSummary {
        original_count,
        processed_count: features.len(),
        options: options.clone(),
    };
    Ok(NormalizedCollection { features, summary })
}

/// Normalize a single feature: simplify, filter by area, orthogonalize, cap
/// vertices, and degrade still-complex shapes to their bounding rectangle.
///
/// Non-polygon features pass through unchanged. Returns `None` for polygons
/// below the area threshold.
pub fn process_feature(
    feature: &Feature,
    options: &NormalizeOptions,
) -> anyhow::Result<Option<Feature>> {
    let polygon = match &feature.geometry {
        geo::Geometry::Polygon(polygon) => polygon,
        _ => return Ok(Some(feature.clone())),
    };
    ensure_finite_ring(polygon.exterior())?;

    let original_area = polygon.unsigned_area();

    let exterior = simplify_ring(polygon.exterior(), options.tolerance);

    if original_area < options.min_area {
        return Ok(None);
    }

    let mut processed =
        orthogonalize_polygon(&geo::Polygon::new(exterior, vec![]), options);

    if distinct_vertex_count(processed.exterior()) > options.max_vertices {
        processed = geo::Polygon::new(
            reduce_ring_vertices(processed.exterior(), options.max_vertices),
            vec![],
        );
    }

    if is_too_complex(&processed) {
        processed = bounding_box_approximation(&processed)?;
    }

    let processed_area = processed.unsigned_area();
    let mut properties = feature.properties.clone().unwrap_or_else(JsonObject::new);
    properties.insert("_processed".to_string(), JsonValue::from(true));
    properties.insert("_originalArea".to_string(), JsonValue::from(original_area));
    properties.insert(
        "_processedArea".to_string(),
        JsonValue::from(processed_area),
    );

    Ok(Some(Feature {
        geometry: geo::Geometry::Polygon(processed),
        properties: Some(properties),
    }))
}

fn ensure_finite_ring(ring: &geo::LineString) -> anyhow::Result<()> {
    for coord in &ring.0 {
        if !coord.x.is_finite() || !coord.y.is_finite() {
            return Err(anyhow!(
                "Ring contains a non-finite coordinate ({}, {})",
                coord.x,
                coord.y
            ));
        }
    }
    Ok(())
}
