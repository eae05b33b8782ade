use std::{fs, path::Path};

use super::feature::Feature;

pub fn read_features_from_geojson(filepath: &Path) -> anyhow::Result<Vec<Feature>> {
    let contents = fs::read_to_string(filepath)?;
    let geojson_contents: geojson::GeoJson = contents.parse()?;
    let feature_collection = geojson::FeatureCollection::try_from(geojson_contents)?;
    let num_features = feature_collection.features.len();
    let features: Vec<Feature> = feature_collection
        .features
        .into_iter()
        .filter_map(|feature| Feature::try_from(feature).ok())
        .collect();
    if features.len() != num_features {
        log::warn!(
            "Out of {} features read, only {} had a convertible geometry.",
            num_features,
            features.len()
        )
    }
    Ok(features)
}

pub fn write_features_to_geojson(
    features: &Vec<Feature>,
    output_filepath: &Path,
) -> anyhow::Result<()> {
    let feature_collection: geojson::FeatureCollection = features
        .iter()
        .map(|feature| geojson::Feature::from(feature))
        .collect();
    let geojson_contents = geojson::GeoJson::from(feature_collection);
    fs::write(output_filepath, geojson_contents.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use geojson::JsonObject;
    use testdir::testdir;

    use crate::geofile::feature::Feature;

    use super::{read_features_from_geojson, write_features_to_geojson};

    #[test]
    fn test_geojson_write_read_round_trip() {
        let mut properties = JsonObject::new();
        properties.insert("building".to_string(), "yes".into());
        properties.insert("name".to_string(), "Old Mill".into());
        let features = vec![
            Feature {
                geometry: geo::Geometry::Polygon(geo::Polygon::new(
                    geo::LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
                    vec![],
                )),
                properties: Some(properties),
            },
            Feature {
                geometry: geo::Geometry::Point(geo::Point::new(8.0, 47.0)),
                properties: None,
            },
        ];

        let test_dir = testdir!();
        let geojson_filepath = test_dir.join("features.geojson");

        write_features_to_geojson(&features, &geojson_filepath).unwrap();
        let read_features = read_features_from_geojson(&geojson_filepath).unwrap();

        assert_eq!(features, read_features);
    }

    #[test]
    fn test_read_rejects_non_feature_collection() {
        let test_dir = testdir!();
        let geojson_filepath = test_dir.join("point.geojson");
        std::fs::write(
            &geojson_filepath,
            r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#,
        )
        .unwrap();

        assert!(read_features_from_geojson(&geojson_filepath).is_err());
    }
}
