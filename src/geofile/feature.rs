use anyhow::anyhow;
use geojson::JsonObject;

/// A geometry with an open-ended set of string-keyed properties, as read from
/// a GeoJSON feature. Properties are passed through processing unmodified
/// except for annotations added by the normalization pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub geometry: geo::Geometry,
    pub properties: Option<JsonObject>,
}

impl From<geo::Geometry> for Feature {
    fn from(value: geo::Geometry) -> Self {
        Self {
            geometry: value,
            properties: None,
        }
    }
}

impl TryFrom<geojson::Feature> for Feature {
    type Error = anyhow::Error;

    fn try_from(value: geojson::Feature) -> anyhow::Result<Self> {
        let geometry = value
            .geometry
            .ok_or_else(|| anyhow!("Feature has no geometry"))?;
        Ok(Self {
            geometry: geo::Geometry::try_from(geometry)?,
            properties: value.properties,
        })
    }
}

impl From<&Feature> for geojson::Feature {
    fn from(value: &Feature) -> Self {
        geojson::Feature {
            bbox: None,
            geometry: Some(geojson::Geometry::new(geojson::Value::from(
                &value.geometry,
            ))),
            id: None,
            properties: value.properties.clone(),
            foreign_members: None,
        }
    }
}

impl Feature {
    /// Value of the given property if it is present and a string.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|properties| properties.get(key))
            .and_then(|value| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use geojson::JsonObject;

    use super::Feature;

    #[test]
    fn test_geojson_feature_round_trip() {
        let mut properties = JsonObject::new();
        properties.insert("building".to_string(), "house".into());
        let feature = Feature {
            geometry: geo::Geometry::Point(geo::Point::new(80.0, 45.0)),
            properties: Some(properties),
        };

        let geojson_feature = geojson::Feature::from(&feature);
        let round_tripped = Feature::try_from(geojson_feature).unwrap();
        assert_eq!(feature, round_tripped);
    }

    #[test]
    fn test_feature_without_geometry_is_rejected() {
        let geojson_feature = geojson::Feature {
            bbox: None,
            geometry: None,
            id: None,
            properties: None,
            foreign_members: None,
        };
        assert!(Feature::try_from(geojson_feature).is_err());
    }
}
