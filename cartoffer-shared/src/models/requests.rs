use serde::{Deserialize, Serialize};

use super::offer::OfferType;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Body of `POST /api/v1/offer`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferRequest {
    pub restaurant_id: i64,
    pub offer_type: OfferType,
    pub offer_value: i64,
    #[serde(alias = "segments", default)]
    pub customer_segment: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfferResponse {
    pub response_msg: String,
}

impl OfferResponse {
    pub fn success() -> Self {
        Self {
            response_msg: "success".to_string(),
        }
    }
}

/// Body of `POST /api/v1/cart/apply_offer`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyOfferRequest {
    pub cart_value: i64,
    pub user_id: i64,
    pub restaurant_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApplyOfferResponse {
    pub cart_value: i64,
}
