pub mod rules;
pub mod service;

pub use rules::discounted_total;
pub use service::{OfferError, OfferService};
