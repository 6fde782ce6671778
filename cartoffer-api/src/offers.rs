use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json,
    Router,
};
use cartoffer_shared::models::requests::{OfferRequest, OfferResponse};
use cartoffer_shared::Offer;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/offer", post(register_offer))
        .route("/api/v1/offer/{restaurant_id}", get(get_offer))
}

/// POST /api/v1/offer
/// Register (or replace) the offer of a restaurant
pub async fn register_offer(
    State(state): State<AppState>,
    Json(req): Json<OfferRequest>,
) -> Result<Json<OfferResponse>, AppError> {
    state.offers.register(req).await?;
    Ok(Json(OfferResponse::success()))
}

/// GET /api/v1/offer/{restaurant_id}
pub async fn get_offer(
    State(state): State<AppState>,
    Path(restaurant_id): Path<i64>,
) -> Result<Json<Offer>, AppError> {
    state
        .offers
        .lookup(restaurant_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("No offer for restaurant {}", restaurant_id)))
}
