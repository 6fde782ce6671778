use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use cartoffer_core::{CoreError, CoreResult, OfferRepository, SegmentResolver, StaticSegmentResolver};
use tracing::info;

pub mod app_config;
pub mod memory_repo;
pub mod redis_repo;
pub mod segment_client;

pub use memory_repo::InMemoryOfferRepository;
pub use redis_repo::RedisOfferRepository;
pub use segment_client::HttpSegmentResolver;

use app_config::{SegmentsConfig, StoreBackend, StoreConfig};

/// Build the offer repository selected by `store.backend`
pub fn offer_repository(config: &StoreConfig) -> CoreResult<Arc<dyn OfferRepository>> {
    match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory offer store");
            Ok(Arc::new(InMemoryOfferRepository::new()))
        }
        StoreBackend::Redis => {
            let url = config.redis_url.as_deref().ok_or_else(|| {
                CoreError::ConfigError("store.redis_url is required for the redis backend".to_string())
            })?;
            info!("Using redis offer store at {}", url);
            let repo = RedisOfferRepository::new(url)
                .map_err(|e| CoreError::StoreError(format!("invalid redis url: {}", e)))?;
            Ok(Arc::new(repo))
        }
    }
}

/// Build the segment resolver: the HTTP client when `segments.service_url`
/// is set, otherwise the static user table
pub fn segment_resolver(config: &SegmentsConfig) -> CoreResult<Arc<dyn SegmentResolver>> {
    if let Some(url) = &config.service_url {
        info!("Resolving user segments via {}", url);
        let client = HttpSegmentResolver::new(url, Duration::from_millis(config.timeout_ms))
            .map_err(|e| CoreError::ConfigError(format!("segment client: {}", e)))?;
        return Ok(Arc::new(client));
    }

    let users: HashMap<_, _> = config.user_table()?;
    info!("Resolving user segments from static table ({} users)", users.len());
    Ok(Arc::new(StaticSegmentResolver::new(users)))
}
