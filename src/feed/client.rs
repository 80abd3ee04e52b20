//! HTTP client for the earthquake and plate-boundary feeds.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::error::{FeedError, Result};
use super::model::EarthquakeFeed;
use crate::settings::Settings;

pub struct FeedClient {
    client: Client,
    earthquake_feed_base: String,
    plates_url: String,
}

impl FeedClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            earthquake_feed_base: settings.earthquake_feed_base.clone(),
            plates_url: settings.plates_url.clone(),
        })
    }

    /// The time frame is substituted as-is.
    pub fn earthquake_url(&self, time_frame: &str) -> String {
        format!("{}/all_{}.geojson", self.earthquake_feed_base, time_frame)
    }

    pub async fn fetch_earthquakes(&self, time_frame: &str) -> Result<EarthquakeFeed> {
        let feed: EarthquakeFeed = self.get_json(&self.earthquake_url(time_frame)).await?;
        debug!("🌋 {} earthquake features for '{}'", feed.features.len(), time_frame);
        Ok(feed)
    }

    /// Plate boundaries are passed through untouched.
    pub async fn fetch_plates(&self) -> Result<Value> {
        self.get_json(&self.plates_url).await
    }

    /// Fetches both feeds concurrently; fails if either fails.
    pub async fn fetch_all(&self, time_frame: &str) -> Result<(EarthquakeFeed, Value)> {
        tokio::try_join!(self.fetch_earthquakes(time_frame), self.fetch_plates())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = resp.bytes().await?;
        debug!("📥 {} bytes from {}", bytes.len(), url);
        serde_json::from_slice(&bytes).map_err(|source| FeedError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
