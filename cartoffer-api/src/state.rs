use std::sync::Arc;

use cartoffer_core::{OfferRepository, SegmentResolver};
use cartoffer_offer::OfferService;

#[derive(Clone)]
pub struct AppState {
    pub offers: Arc<OfferService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn OfferRepository>, segments: Arc<dyn SegmentResolver>) -> Self {
        Self {
            offers: Arc::new(OfferService::new(repo, segments)),
        }
    }
}
