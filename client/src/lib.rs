//! HTTP client, error taxonomy and query cache for the taskboard data layer.
//!
//! Resource services in `taskboard-atoms` take these as arguments rather than
//! owning them, so a single client + cache pair is shared across the app.

pub mod api;
pub mod cache;
pub mod error;

pub use api::{Api, ApiClient};
pub use cache::{QueryCache, QueryKey};
pub use error::Error;
