// Port configuration
pub const DEFAULT_PORT: u16 = 3001;

// Feed sources
pub const EARTHQUAKE_FEED_BASE: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";
pub const PLATES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/refs/heads/master/GeoJSON/PB2002_boundaries.json";
pub const DEFAULT_TIME_FRAME: &str = "week";
pub const TIME_FRAMES: &[&str] = &["hour", "day", "week", "month"];
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Initial view
pub const MAP_CENTER: [f64; 2] = [20.0, -30.0];
pub const MAP_ZOOM: u8 = 3;

// Marker style
pub const MARKER_FILL_OPACITY: f64 = 0.9;
pub const MARKER_STROKE_COLOR: &str = "#000";
pub const MARKER_STROKE_WEIGHT: f64 = 0.5;
pub const RADIUS_FACTOR: f64 = 2.0;

// Heat layer
pub const HEAT_RADIUS: u32 = 50;
pub const HEAT_BLUR: u32 = 15;

// Plate boundaries
pub const PLATE_COLOR: &str = "orange";
pub const PLATE_WEIGHT: f64 = 3.0;

// Base tiles
pub const STREET_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const STREET_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;
pub const TOPO_TILES: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";
pub const TOPO_ATTRIBUTION: &str = r#"Map data: &copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors, <a href="http://viewfinderpanoramas.org">SRTM</a> | Map style: &copy; <a href="https://opentopomap.org">OpenTopoMap</a> (<a href="https://creativecommons.org/licenses/by-sa/3.0/">CC-BY-SA</a>)"#;

// Layer names shown in the layer control
pub const LAYER_STREET: &str = "Street";
pub const LAYER_TOPO: &str = "Topography";
pub const LAYER_EARTHQUAKES: &str = "Earthquakes";
pub const LAYER_PLATES: &str = "Tectonic Plates";
pub const LAYER_HEAT: &str = "HeatMap";
