use std::collections::HashMap;

use async_trait::async_trait;
use cartoffer_core::{CoreResult, OfferRepository};
use cartoffer_shared::Offer;
use tokio::sync::RwLock;

/// Process-local offer store, one offer per restaurant
#[derive(Debug, Default)]
pub struct InMemoryOfferRepository {
    offers: RwLock<HashMap<i64, Offer>>,
}

impl InMemoryOfferRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.offers.read().await.len()
    }
}

#[async_trait]
impl OfferRepository for InMemoryOfferRepository {
    async fn save_offer(&self, offer: &Offer) -> CoreResult<()> {
        self.offers
            .write()
            .await
            .insert(offer.restaurant_id, offer.clone());
        Ok(())
    }

    async fn get_offer(&self, restaurant_id: i64) -> CoreResult<Option<Offer>> {
        Ok(self.offers.read().await.get(&restaurant_id).cloned())
    }
}
