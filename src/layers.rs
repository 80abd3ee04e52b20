//! Turns fetched feeds into the layer set the front-end hands to Leaflet.
//!
//! Field names are serialized in camelCase so that the style objects can be
//! passed straight through as Leaflet options.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::constants::*;
use crate::feed::{EarthquakeFeed, Quake};
use crate::scale::{depth_color, legend_entries, magnitude_radius, LegendEntry};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub fill_opacity: f64,
    pub color: &'static str,
    pub weight: f64,
    pub fill_color: &'static str,
    pub radius: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleMarker {
    pub lat_lng: [f64; 2],
    pub options: MarkerStyle,
    pub popup: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerLayer {
    pub name: &'static str,
    pub markers: Vec<CircleMarker>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatOptions {
    pub radius: u32,
    pub blur: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatLayer {
    pub name: &'static str,
    pub points: Vec<[f64; 2]>,
    pub options: HeatOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathStyle {
    pub color: &'static str,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlateLayer {
    pub name: &'static str,
    pub data: Value,
    pub style: PathStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct TileLayer {
    pub name: &'static str,
    pub url: &'static str,
    pub attribution: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub position: &'static str,
    pub title: &'static str,
    pub entries: Vec<LegendEntry>,
}

/// Everything needed to draw one map: view, base tiles, overlays and controls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapScene {
    pub generation: u64,
    pub time_frame: String,
    pub rendered_at: DateTime<Utc>,
    pub center: [f64; 2],
    pub zoom: u8,
    pub base_layers: Vec<TileLayer>,
    pub earthquakes: MarkerLayer,
    pub heat: HeatLayer,
    pub plates: PlateLayer,
    /// Layer names visible when the map is first shown.
    pub default_layers: Vec<&'static str>,
    pub legend: Legend,
    pub skipped: usize,
}

fn number_or_null(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "null".to_string())
}

pub fn popup_html(quake: &Quake) -> String {
    let depth = number_or_null(quake.depth);
    let mag = number_or_null(quake.magnitude);

    format!(
        r#"<div style="font-size: 14px; line-height: 1.4;">
  <h4>{}</h4>
  <hr>
  <p><strong>Depth:</strong> {}m</p>
  <p><strong>Magnitude:</strong> {}</p>
  <p><strong>Location:</strong> {:.2}, {:.2}</p>
</div>"#,
        quake.title, depth, mag, quake.latitude, quake.longitude
    )
}

pub fn circle_marker(quake: &Quake) -> CircleMarker {
    CircleMarker {
        lat_lng: [quake.latitude, quake.longitude],
        options: MarkerStyle {
            fill_opacity: MARKER_FILL_OPACITY,
            color: MARKER_STROKE_COLOR,
            weight: MARKER_STROKE_WEIGHT,
            fill_color: depth_color(quake.depth.unwrap_or(f64::NAN)),
            radius: quake.magnitude.map(magnitude_radius).unwrap_or(0.0),
        },
        popup: popup_html(quake),
    }
}

/// One marker and one heat point per feature that has coordinates.
/// Returns the number of features skipped alongside.
pub fn quake_layers(feed: &EarthquakeFeed) -> (MarkerLayer, HeatLayer, usize) {
    let mut markers = Vec::with_capacity(feed.features.len());
    let mut points = Vec::with_capacity(feed.features.len());
    let mut skipped = 0;

    for (i, feature) in feed.features.iter().enumerate() {
        match feature.quake() {
            Some(quake) => {
                points.push([quake.latitude, quake.longitude]);
                markers.push(circle_marker(&quake));
            }
            None => {
                trace!("feature #{} has no usable coordinates, skipping", i);
                skipped += 1;
            }
        }
    }

    (
        MarkerLayer {
            name: LAYER_EARTHQUAKES,
            markers,
        },
        HeatLayer {
            name: LAYER_HEAT,
            points,
            options: HeatOptions {
                radius: HEAT_RADIUS,
                blur: HEAT_BLUR,
            },
        },
        skipped,
    )
}

pub fn plate_layer(plates: Value) -> PlateLayer {
    PlateLayer {
        name: LAYER_PLATES,
        data: plates,
        style: PathStyle {
            color: PLATE_COLOR,
            weight: PLATE_WEIGHT,
        },
    }
}

pub fn base_layers() -> Vec<TileLayer> {
    vec![
        TileLayer {
            name: LAYER_STREET,
            url: STREET_TILES,
            attribution: STREET_ATTRIBUTION,
        },
        TileLayer {
            name: LAYER_TOPO,
            url: TOPO_TILES,
            attribution: TOPO_ATTRIBUTION,
        },
    ]
}

pub fn build_scene(generation: u64, time_frame: &str, feed: &EarthquakeFeed, plates: Value) -> MapScene {
    let (earthquakes, heat, skipped) = quake_layers(feed);
    debug!(
        "🗺️  scene #{}: {} markers, {} skipped",
        generation,
        earthquakes.markers.len(),
        skipped
    );

    MapScene {
        generation,
        time_frame: time_frame.to_string(),
        rendered_at: Utc::now(),
        center: MAP_CENTER,
        zoom: MAP_ZOOM,
        base_layers: base_layers(),
        earthquakes,
        heat,
        plates: plate_layer(plates),
        default_layers: vec![LAYER_STREET, LAYER_EARTHQUAKES, LAYER_PLATES],
        legend: Legend {
            position: "bottomright",
            title: "Earthquake Depth",
            entries: legend_entries(),
        },
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{PLATES, QUAKES_WEEK};

    fn week_feed() -> EarthquakeFeed {
        serde_json::from_str(QUAKES_WEEK).unwrap()
    }

    #[test]
    fn one_marker_and_heat_point_per_located_feature() {
        let (markers, heat, skipped) = quake_layers(&week_feed());
        assert_eq!(markers.markers.len(), 2);
        assert_eq!(heat.points.len(), 2);
        assert_eq!(skipped, 1);
        assert_eq!(heat.points[0], [-17.9, 178.2]);
    }

    #[test]
    fn marker_style_follows_depth_and_magnitude() {
        let (markers, _, _) = quake_layers(&week_feed());
        let deep = &markers.markers[0];
        assert_eq!(deep.lat_lng, [-17.9, 178.2]);
        assert_eq!(deep.options.fill_color, "#ea2c2c");
        assert_eq!(deep.options.radius, 10.0);
        assert_eq!(deep.options.color, "#000");

        let shallow = &markers.markers[1];
        assert_eq!(shallow.options.fill_color, "#98ee00");
        assert_eq!(shallow.options.radius, 3.4);
    }

    #[test]
    fn popup_carries_title_depth_and_magnitude() {
        let quake = Quake {
            longitude: -117.0512,
            latitude: 38.1049,
            depth: Some(8.3),
            magnitude: Some(1.7),
            title: "M 1.7 - 27 km SE of Mina, Nevada".to_string(),
        };
        let popup = popup_html(&quake);
        assert!(popup.contains("<h4>M 1.7 - 27 km SE of Mina, Nevada</h4>"));
        assert!(popup.contains("8.3m"));
        assert!(popup.contains("<strong>Magnitude:</strong> 1.7"));
        assert!(popup.contains("38.10, -117.05"));
    }

    #[test]
    fn missing_magnitude_gives_zero_radius() {
        let quake = Quake {
            longitude: 0.0,
            latitude: 0.0,
            depth: Some(12.0),
            magnitude: None,
            title: String::new(),
        };
        let marker = circle_marker(&quake);
        assert_eq!(marker.options.radius, 0.0);
        assert!(marker.popup.contains("<strong>Magnitude:</strong> null"));
    }

    #[test]
    fn missing_depth_gets_shallow_color() {
        let quake = Quake {
            longitude: 11.0,
            latitude: 21.0,
            depth: None,
            magnitude: Some(2.5),
            title: "M 2.5".to_string(),
        };
        let marker = circle_marker(&quake);
        assert_eq!(marker.options.fill_color, "#98ee00");
        assert_eq!(marker.options.radius, 5.0);
        assert!(marker.popup.contains("nullm"));
    }

    #[test]
    fn empty_feed_still_builds_a_scene() {
        let scene = build_scene(1, "hour", &EarthquakeFeed::default(), Value::Null);
        assert!(scene.earthquakes.markers.is_empty());
        assert!(scene.heat.points.is_empty());
        assert_eq!(scene.skipped, 0);
    }

    #[test]
    fn scene_serializes_with_leaflet_option_names() {
        let plates: Value = serde_json::from_str(PLATES).unwrap();
        let scene = build_scene(7, "week", &week_feed(), plates.clone());
        let json = serde_json::to_value(&scene).unwrap();

        assert_eq!(json["generation"], 7);
        assert_eq!(json["timeFrame"], "week");
        assert_eq!(json["center"], serde_json::json!([20.0, -30.0]));
        assert_eq!(json["zoom"], 3);
        assert_eq!(json["defaultLayers"], serde_json::json!(["Street", "Earthquakes", "Tectonic Plates"]));
        assert_eq!(json["baseLayers"][1]["name"], "Topography");
        assert_eq!(json["earthquakes"]["markers"][0]["options"]["fillColor"], "#ea2c2c");
        assert_eq!(json["earthquakes"]["markers"][0]["options"]["fillOpacity"], 0.9);
        assert_eq!(json["heat"]["options"]["radius"], 50);
        assert_eq!(json["heat"]["name"], "HeatMap");
        assert_eq!(json["plates"]["style"]["color"], "orange");
        assert_eq!(json["plates"]["data"], plates);
        assert_eq!(json["legend"]["entries"][5]["label"], "90+");
    }
}
