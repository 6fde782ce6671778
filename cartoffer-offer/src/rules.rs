use cartoffer_shared::models::requests::OfferRequest;
use cartoffer_shared::OfferType;

use crate::service::OfferError;

/// Upper bound for a FLATPERCENT offer value
pub const MAX_PERCENT: i64 = 100;

/// Cart total after a discount of `offer_type` / `offer_value` is taken off.
///
/// FLATX subtracts the value and floors at zero. FLATPERCENT subtracts
/// `floor(cart_value * offer_value / 100)`.
pub fn discounted_total(offer_type: OfferType, offer_value: i64, cart_value: i64) -> i64 {
    match offer_type {
        OfferType::FlatX => cart_value.saturating_sub(offer_value).max(0),
        OfferType::FlatPercent => {
            let cart = i128::from(cart_value);
            let discount = (cart * i128::from(offer_value)).div_euclid(100);
            i64::try_from((cart - discount).max(0)).unwrap_or(i64::MAX)
        }
    }
}

pub fn validate_offer(req: &OfferRequest) -> Result<(), OfferError> {
    if req.offer_value < 0 {
        return Err(OfferError::InvalidOffer(format!(
            "offer_value must not be negative, got {}",
            req.offer_value
        )));
    }

    if req.offer_type == OfferType::FlatPercent && req.offer_value > MAX_PERCENT {
        return Err(OfferError::InvalidOffer(format!(
            "FLATPERCENT offer_value must be at most {}, got {}",
            MAX_PERCENT, req.offer_value
        )));
    }

    Ok(())
}

pub fn validate_cart(cart_value: i64) -> Result<(), OfferError> {
    if cart_value < 0 {
        return Err(OfferError::InvalidCart(format!(
            "cart_value must not be negative, got {}",
            cart_value
        )));
    }
    Ok(())
}
