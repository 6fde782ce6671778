use std::sync::Arc;

use cartoffer_core::{CoreError, OfferRepository, SegmentResolver};
use cartoffer_shared::models::requests::{ApplyOfferRequest, OfferRequest};
use cartoffer_shared::{Offer, Segment};
use tracing::{debug, info};

use crate::rules;

/// Registers restaurant offers and applies them to carts
pub struct OfferService {
    repo: Arc<dyn OfferRepository>,
    segments: Arc<dyn SegmentResolver>,
}

impl OfferService {
    pub fn new(repo: Arc<dyn OfferRepository>, segments: Arc<dyn SegmentResolver>) -> Self {
        Self { repo, segments }
    }

    /// Store the offer for its restaurant, replacing any previous one
    pub async fn register(&self, req: OfferRequest) -> Result<Offer, OfferError> {
        rules::validate_offer(&req)?;

        let offer = Offer::new(
            req.restaurant_id,
            req.offer_type,
            req.offer_value,
            req.customer_segment.into_iter().map(Segment::new),
        );
        self.repo.save_offer(&offer).await?;

        info!(
            restaurant_id = offer.restaurant_id,
            offer_type = %offer.offer_type,
            offer_value = offer.offer_value,
            segments = offer.segments.len(),
            "Offer registered"
        );
        Ok(offer)
    }

    pub async fn lookup(&self, restaurant_id: i64) -> Result<Option<Offer>, OfferError> {
        Ok(self.repo.get_offer(restaurant_id).await?)
    }

    /// Cart value after the restaurant's offer, if the user is eligible.
    ///
    /// A missing offer, an unknown user and a segment mismatch all leave the
    /// cart untouched.
    pub async fn apply(&self, req: &ApplyOfferRequest) -> Result<i64, OfferError> {
        rules::validate_cart(req.cart_value)?;

        let Some(segment) = self.segments.resolve(req.user_id).await? else {
            debug!(user_id = req.user_id, "No segment for user, cart unchanged");
            return Ok(req.cart_value);
        };

        let Some(offer) = self.repo.get_offer(req.restaurant_id).await? else {
            debug!(restaurant_id = req.restaurant_id, "No offer for restaurant, cart unchanged");
            return Ok(req.cart_value);
        };

        if !offer.applies_to(&segment) {
            debug!(
                restaurant_id = req.restaurant_id,
                segment = %segment,
                "Offer not applicable to segment, cart unchanged"
            );
            return Ok(req.cart_value);
        }

        let total = rules::discounted_total(offer.offer_type, offer.offer_value, req.cart_value);
        info!(
            restaurant_id = req.restaurant_id,
            user_id = req.user_id,
            offer_type = %offer.offer_type,
            cart_value = req.cart_value,
            discounted = total,
            "Offer applied"
        );
        Ok(total)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OfferError {
    #[error("Invalid offer: {0}")]
    InvalidOffer(String),

    #[error("Invalid cart: {0}")]
    InvalidCart(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cartoffer_core::{CoreResult, StaticSegmentResolver};
    use cartoffer_shared::OfferType;
    use cartoffer_store::InMemoryOfferRepository;

    struct FailingResolver;

    #[async_trait]
    impl SegmentResolver for FailingResolver {
        async fn resolve(&self, _user_id: i64) -> CoreResult<Option<Segment>> {
            Err(CoreError::SegmentServiceError("unreachable".to_string()))
        }
    }

    fn service() -> OfferService {
        OfferService::new(
            Arc::new(InMemoryOfferRepository::new()),
            Arc::new(StaticSegmentResolver::default().with_user(1, "p1").with_user(2, "p2")),
        )
    }

    fn offer(restaurant_id: i64, offer_type: OfferType, offer_value: i64, segments: &[&str]) -> OfferRequest {
        OfferRequest {
            restaurant_id,
            offer_type,
            offer_value,
            customer_segment: segments.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn cart(cart_value: i64, user_id: i64, restaurant_id: i64) -> ApplyOfferRequest {
        ApplyOfferRequest {
            cart_value,
            user_id,
            restaurant_id,
        }
    }

    #[tokio::test]
    async fn test_flat_offer_applied() {
        let svc = service();
        svc.register(offer(1, OfferType::FlatX, 50, &["p1"])).await.unwrap();

        assert_eq!(svc.apply(&cart(200, 1, 1)).await.unwrap(), 150);
    }

    #[tokio::test]
    async fn test_no_offer_leaves_cart() {
        let svc = service();
        assert_eq!(svc.apply(&cart(300, 1, 99)).await.unwrap(), 300);
    }

    #[tokio::test]
    async fn test_segment_mismatch_leaves_cart() {
        let svc = service();
        svc.register(offer(6, OfferType::FlatX, 100, &["p2"])).await.unwrap();

        assert_eq!(svc.apply(&cart(500, 1, 6)).await.unwrap(), 500);
        assert_eq!(svc.apply(&cart(500, 2, 6)).await.unwrap(), 400);
    }

    #[tokio::test]
    async fn test_unknown_user_leaves_cart() {
        let svc = service();
        svc.register(offer(2, OfferType::FlatPercent, 20, &["p1"])).await.unwrap();

        assert_eq!(svc.apply(&cart(500, 77, 2)).await.unwrap(), 500);
    }

    #[tokio::test]
    async fn test_reregistration_overwrites() {
        let svc = service();
        svc.register(offer(5, OfferType::FlatX, 10, &["p1"])).await.unwrap();
        svc.register(offer(5, OfferType::FlatPercent, 50, &["p1"])).await.unwrap();

        let stored = svc.lookup(5).await.unwrap().unwrap();
        assert_eq!(stored.offer_type, OfferType::FlatPercent);
        assert_eq!(svc.apply(&cart(1000, 1, 5)).await.unwrap(), 500);
    }

    #[tokio::test]
    async fn test_invalid_offer_not_stored() {
        let svc = service();
        let err = svc.register(offer(8, OfferType::FlatPercent, 150, &["p1"])).await.unwrap_err();

        assert!(matches!(err, OfferError::InvalidOffer(_)));
        assert!(svc.lookup(8).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_negative_cart_rejected() {
        let svc = service();
        let err = svc.apply(&cart(-1, 1, 1)).await.unwrap_err();
        assert!(matches!(err, OfferError::InvalidCart(_)));
    }

    #[tokio::test]
    async fn test_resolver_failure_propagates() {
        let svc = OfferService::new(Arc::new(InMemoryOfferRepository::new()), Arc::new(FailingResolver));
        let err = svc.apply(&cart(100, 1, 1)).await.unwrap_err();

        assert!(matches!(err, OfferError::Core(CoreError::SegmentServiceError(_))));
    }
}
