use std::sync::Arc;
use crate::renderer::MapRenderer;
use crate::settings::Settings;

// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<MapRenderer>,
    pub settings: Arc<Settings>,
}
