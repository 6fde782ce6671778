use async_trait::async_trait;
use cartoffer_core::{CoreError, CoreResult, OfferRepository};
use cartoffer_shared::Offer;
use redis::AsyncCommands;
use tracing::info;

/// Offer store keeping each restaurant's offer as JSON under `offer:{id}`
#[derive(Clone)]
pub struct RedisOfferRepository {
    client: redis::Client,
}

impl RedisOfferRepository {
    pub fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        Ok(Self { client })
    }

    async fn connection(&self) -> CoreResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(store_error)
    }
}

pub fn offer_key(restaurant_id: i64) -> String {
    format!("offer:{}", restaurant_id)
}

fn store_error(err: redis::RedisError) -> CoreError {
    CoreError::StoreError(err.to_string())
}

pub fn encode_offer(offer: &Offer) -> CoreResult<String> {
    serde_json::to_string(offer)
        .map_err(|e| CoreError::InternalError(format!("offer encoding failed: {}", e)))
}

pub fn decode_offer(restaurant_id: i64, raw: &str) -> CoreResult<Offer> {
    serde_json::from_str(raw)
        .map_err(|e| CoreError::StoreError(format!("corrupt offer for restaurant {}: {}", restaurant_id, e)))
}

#[async_trait]
impl OfferRepository for RedisOfferRepository {
    async fn save_offer(&self, offer: &Offer) -> CoreResult<()> {
        let payload = encode_offer(offer)?;

        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(offer_key(offer.restaurant_id), payload)
            .await
            .map_err(store_error)?;
        info!("Offer stored in redis for restaurant {}", offer.restaurant_id);
        Ok(())
    }

    async fn get_offer(&self, restaurant_id: i64) -> CoreResult<Option<Offer>> {
        let mut conn = self.connection().await?;
        let payload: Option<String> = conn.get(offer_key(restaurant_id)).await.map_err(store_error)?;

        payload.map(|raw| decode_offer(restaurant_id, &raw)).transpose()
    }
}
