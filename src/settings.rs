use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::constants::{
    DEFAULT_PORT, DEFAULT_TIME_FRAME, EARTHQUAKE_FEED_BASE, PLATES_URL, REQUEST_TIMEOUT_SECS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub port: u16,
    pub default_time_frame: String,
    pub earthquake_feed_base: String,
    pub plates_url: String,
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub auto_open_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            default_time_frame: DEFAULT_TIME_FRAME.to_string(),
            earthquake_feed_base: EARTHQUAKE_FEED_BASE.to_string(),
            plates_url: PLATES_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            auto_open_browser: false,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Reads `key = value` lines. Unknown keys and unparsable values are ignored.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        if !config_path.exists() {
            return Ok(settings);
        }

        let file = File::open(config_path).context("Failed to open config file")?;
        let reader = BufReader::new(file);
        let mut config_map = HashMap::new();

        for line in reader.lines() {
            let line = line.context("Failed to read line from config")?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                config_map.insert(key.trim().to_string(), value.trim().trim_matches('"').to_string());
            }
        }

        if let Some(port_str) = config_map.get("port") {
            if let Ok(port) = port_str.parse::<u16>() {
                settings.port = port;
            }
        }
        if let Some(time_frame) = config_map.get("default_time_frame") {
            if !time_frame.is_empty() {
                settings.default_time_frame = time_frame.clone();
            }
        }
        if let Some(base) = config_map.get("earthquake_feed_base") {
            if !base.is_empty() {
                settings.earthquake_feed_base = base.trim_end_matches('/').to_string();
            }
        }
        if let Some(url) = config_map.get("plates_url") {
            if !url.is_empty() {
                settings.plates_url = url.clone();
            }
        }
        if let Some(timeout_str) = config_map.get("request_timeout_secs") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                settings.request_timeout_secs = timeout;
            }
        }
        if let Some(auto_open_str) = config_map.get("auto_open_browser") {
            if let Ok(auto_open) = auto_open_str.parse::<bool>() {
                settings.auto_open_browser = auto_open;
            }
        }

        Ok(settings)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Creating config directory")?;
        }

        let mut content = String::new();
        content.push_str("# QuakeMap Configuration File\n");
        content.push_str(&format!("port = {}\n", self.port));
        content.push_str(&format!("default_time_frame = \"{}\"\n", self.default_time_frame));
        content.push_str(&format!("earthquake_feed_base = \"{}\"\n", self.earthquake_feed_base));
        content.push_str(&format!("plates_url = \"{}\"\n", self.plates_url));
        content.push_str(&format!("request_timeout_secs = {}\n", self.request_timeout_secs));
        content.push_str(&format!("auto_open_browser = {}\n", self.auto_open_browser));

        std::fs::write(config_path, content).context("Failed to write to config file")?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let mut path = std::env::current_exe()
            .unwrap_or_default()
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        if path.ends_with("target/debug") || path.ends_with("target/release") {
            path.pop();
            path.pop();
        }
        path.push("quakemap.ini");
        path
    }
}
