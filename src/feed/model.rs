use serde::Deserialize;
use serde_json::Value;

// Earthquake feed as published by the USGS summary endpoints.
// Only the fields the map uses are decoded; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EarthquakeFeed {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    // Kept as raw JSON so one odd geometry cannot reject the whole feed.
    #[serde(default)]
    pub geometry: Option<Value>,
    #[serde(default)]
    pub properties: Option<Properties>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub mag: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
}

/// A single event, flattened out of its feed feature.
#[derive(Debug, Clone, PartialEq)]
pub struct Quake {
    pub longitude: f64,
    pub latitude: f64,
    pub depth: Option<f64>,
    pub magnitude: Option<f64>,
    pub title: String,
}

impl Feature {
    /// `None` unless `geometry.coordinates` starts with a numeric
    /// longitude/latitude pair. A missing or non-numeric depth or magnitude
    /// is carried as `None`.
    pub fn quake(&self) -> Option<Quake> {
        let coords = self.geometry.as_ref()?.get("coordinates")?.as_array()?;
        let longitude = coords.first()?.as_f64()?;
        let latitude = coords.get(1)?.as_f64()?;

        let properties = self.properties.as_ref();
        let title = match properties.and_then(|p| p.title.as_ref()) {
            Some(Value::String(title)) => title.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };

        Some(Quake {
            longitude,
            latitude,
            depth: coords.get(2).and_then(Value::as_f64),
            magnitude: properties.and_then(|p| p.mag.as_ref()).and_then(Value::as_f64),
            title,
        })
    }
}
