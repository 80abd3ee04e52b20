use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, info, warn};

use crate::feed::{FeedClient, FeedError};
use crate::layers::{build_scene, MapScene};

/// Runs the fetch-transform-compose pipeline and holds the map currently on
/// display.
///
/// Every render draws a new generation number before fetching. A finished
/// render only replaces the displayed scene if nothing newer has been
/// installed in the meantime, so overlapping renders settle on the most
/// recently requested one.
pub struct MapRenderer {
    client: FeedClient,
    next_generation: AtomicU64,
    current: RwLock<Option<Arc<MapScene>>>,
}

impl MapRenderer {
    pub fn new(client: FeedClient) -> Self {
        Self {
            client,
            next_generation: AtomicU64::new(1),
            current: RwLock::new(None),
        }
    }

    pub async fn render(&self, time_frame: &str) -> Result<Arc<MapScene>, FeedError> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        info!("🌍 Render #{} for time frame '{}'", generation, time_frame);

        let (feed, plates) = self.client.fetch_all(time_frame).await.map_err(|e| {
            warn!("❌ Render #{} aborted: {}", generation, e);
            e
        })?;

        let scene = Arc::new(build_scene(generation, time_frame, &feed, plates));
        info!(
            "✅ Render #{} ready: {} earthquakes",
            generation,
            scene.earthquakes.markers.len()
        );

        if !self.install(scene.clone()) {
            debug!("Render #{} superseded by a newer render", generation);
        }
        Ok(scene)
    }

    /// Replaces the displayed scene unless a newer one is already there.
    fn install(&self, scene: Arc<MapScene>) -> bool {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        match current.as_ref() {
            Some(existing) if existing.generation > scene.generation => false,
            _ => {
                *current = Some(scene);
                true
            }
        }
    }

    pub fn current(&self) -> Option<Arc<MapScene>> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
