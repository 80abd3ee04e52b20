pub mod client;
pub mod error;
pub mod model;

pub use client::FeedClient;
pub use error::FeedError;
pub use model::{EarthquakeFeed, Quake};
