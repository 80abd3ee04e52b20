use serde::Serialize;

use crate::constants::RADIUS_FACTOR;

/// Depth color bands, deepest first. The first band whose threshold is
/// exceeded wins; anything at or below the last threshold gets `SHALLOW_COLOR`.
pub const DEPTH_BANDS: &[(f64, &str)] = &[
    (90.0, "#ea2c2c"),
    (70.0, "#ea822c"),
    (50.0, "#ee9c00"),
    (30.0, "#eecc00"),
    (10.0, "#d4ee00"),
];

pub const SHALLOW_COLOR: &str = "#98ee00";

/// One row of the static legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
}

/// Fill color for a quake at `depth`.
pub fn depth_color(depth: f64) -> &'static str {
    DEPTH_BANDS
        .iter()
        .find(|(threshold, _)| depth > *threshold)
        .map(|(_, color)| *color)
        .unwrap_or(SHALLOW_COLOR)
}

/// Marker radius for a quake of magnitude `mag`. Not clamped.
pub fn magnitude_radius(mag: f64) -> f64 {
    mag * RADIUS_FACTOR
}

/// Legend rows, shallowest first.
pub fn legend_entries() -> Vec<LegendEntry> {
    vec![
        LegendEntry { label: "-10-10", color: SHALLOW_COLOR },
        LegendEntry { label: "10-30", color: "#d4ee00" },
        LegendEntry { label: "30-50", color: "#eecc00" },
        LegendEntry { label: "50-70", color: "#ee9c00" },
        LegendEntry { label: "70-90", color: "#ea822c" },
        LegendEntry { label: "90+", color: "#ea2c2c" },
    ]
}
