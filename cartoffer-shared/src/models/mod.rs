pub mod offer;
pub mod requests;
