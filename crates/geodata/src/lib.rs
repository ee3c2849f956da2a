//! GeoJSON type names shared by trip data producers and consumers.
//!
//! Pure data shapes over the [`geojson`] crate; nothing here validates beyond
//! what GeoJSON deserialization already enforces.

use std::collections::HashMap;

use geojson::{FeatureCollection, JsonObject};
use serde::{Deserialize, Serialize};

/// A single GeoJSON feature.
pub type GeoJsonFeature = geojson::Feature;

/// A GeoJSON feature collection carrying an optional `properties` object
/// alongside the standard members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonCollection {
    #[serde(flatten)]
    pub collection: FeatureCollection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<JsonObject>,
}

/// Named collections; `None` marks a key whose data is explicitly absent and
/// serializes as `null`.
pub type GeoJsonDataMap = HashMap<String, Option<GeoJsonCollection>>;

#[cfg(test)]
mod tests {
    use super::*;
    use geojson::{Geometry, Value};
    use serde_json::json;

    fn point_feature(lon: f64, lat: f64) -> GeoJsonFeature {
        GeoJsonFeature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![lon, lat]))),
            id: None,
            properties: None,
            foreign_members: None,
        }
    }

    #[test]
    fn collection_keeps_properties() {
        let mut props = JsonObject::new();
        props.insert("name".into(), json!("Lisbon day 1"));
        let c = GeoJsonCollection {
            collection: FeatureCollection {
                bbox: None,
                features: vec![point_feature(-9.14, 38.72)],
                foreign_members: None,
            },
            properties: Some(props),
        };

        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v["type"], "FeatureCollection");
        assert_eq!(v["properties"]["name"], "Lisbon day 1");
        assert_eq!(v["features"].as_array().map(Vec::len), Some(1));

        let back: GeoJsonCollection = serde_json::from_value(v).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn properties_omitted_when_absent() {
        let c = GeoJsonCollection {
            collection: FeatureCollection { bbox: None, features: vec![], foreign_members: None },
            properties: None,
        };
        let v = serde_json::to_value(&c).unwrap();
        assert!(v.get("properties").is_none());
    }

    #[test]
    fn data_map_null_means_absent() {
        let raw = json!({
            "hotels": {
                "type": "FeatureCollection",
                "features": [],
                "properties": { "color": "#ff0000" }
            },
            "restaurants": null
        });
        let map: GeoJsonDataMap = serde_json::from_value(raw).unwrap();
        assert_eq!(map.len(), 2);
        assert!(map["restaurants"].is_none());
        let hotels = map["hotels"].as_ref().unwrap();
        assert!(hotels.collection.features.is_empty());
        assert_eq!(hotels.properties.as_ref().unwrap()["color"], "#ff0000");

        let v = serde_json::to_value(&map).unwrap();
        assert!(v["restaurants"].is_null());
    }

    #[test]
    fn rejects_non_collection() {
        let raw = json!({ "trip": { "type": "Feature", "geometry": null, "properties": null } });
        assert!(serde_json::from_value::<GeoJsonDataMap>(raw).is_err());
    }
}
