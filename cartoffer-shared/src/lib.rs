pub mod models;

pub use models::offer::{Offer, OfferType, Segment};
