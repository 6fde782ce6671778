pub mod repository;
pub mod segment;

pub use repository::OfferRepository;
pub use segment::{SegmentResolver, StaticSegmentResolver};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Offer store error: {0}")]
    StoreError(String),
    #[error("Segment service error: {0}")]
    SegmentServiceError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
