use geojson::{Feature, JsonObject, JsonValue};
use serde::{Deserialize, Serialize};

/// the representative path geometry for one (route, direction) pair, chosen
/// by the shape selector from the most-travelled shape of that group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RouteShapeFeature {
    /// route short name, e.g. "A" or "7"
    pub route: String,
    /// GTFS direction_id, 0 or 1
    pub direction: u8,
    /// ordered (lon, lat) polyline, always 2 or more points
    pub points: Vec<(f64, f64)>,
    /// hex display color assigned from the line palette
    pub color: String,
    /// how many trips in the group travelled the winning shape
    pub trip_count: usize,
}

impl RouteShapeFeature {
    /// renders this feature as a GeoJSON LineString with the route metadata
    /// as properties, matching the artifact consumed by the map layer.
    pub fn to_geojson_feature(&self) -> Feature {
        let coords = self
            .points
            .iter()
            .map(|(lon, lat)| vec![*lon, *lat])
            .collect();
        let geometry = geojson::Geometry::new(geojson::Value::LineString(coords));

        let mut properties = JsonObject::new();
        properties.insert("route".to_string(), JsonValue::from(self.route.clone()));
        properties.insert("direction".to_string(), JsonValue::from(self.direction));
        properties.insert("color".to_string(), JsonValue::from(self.color.clone()));
        properties.insert("trip_count".to_string(), JsonValue::from(self.trip_count));

        Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}
