use axum::{extract::State, routing::post, Json, Router};
use cartoffer_shared::models::requests::{ApplyOfferRequest, ApplyOfferResponse};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/cart/apply_offer", post(apply_offer))
}

/// POST /api/v1/cart/apply_offer
/// Apply the restaurant's offer to the cart if the user's segment qualifies
pub async fn apply_offer(
    State(state): State<AppState>,
    Json(req): Json<ApplyOfferRequest>,
) -> Result<Json<ApplyOfferResponse>, AppError> {
    let cart_value = state.offers.apply(&req).await?;
    Ok(Json(ApplyOfferResponse { cart_value }))
}
