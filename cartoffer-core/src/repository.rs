use async_trait::async_trait;
use cartoffer_shared::Offer;

use crate::CoreResult;

/// Repository trait for offer data access.
///
/// Offers are keyed by restaurant id; saving replaces whatever the
/// restaurant had before.
#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn save_offer(&self, offer: &Offer) -> CoreResult<()>;

    async fn get_offer(&self, restaurant_id: i64) -> CoreResult<Option<Offer>>;
}
