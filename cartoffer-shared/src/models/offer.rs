use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discount formula carried by an offer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OfferType {
    /// Fixed amount off the cart
    #[serde(rename = "FLATX")]
    FlatX,
    /// Percentage off the cart
    #[serde(rename = "FLATPERCENT")]
    FlatPercent,
}

impl fmt::Display for OfferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferType::FlatX => write!(f, "FLATX"),
            OfferType::FlatPercent => write!(f, "FLATPERCENT"),
        }
    }
}

/// Targeting label assigned to a user (e.g. `p1`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct Segment(pub String);

impl Segment {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Segment {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// The offer a restaurant currently runs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub restaurant_id: i64,
    pub offer_type: OfferType,
    pub offer_value: i64,
    pub segments: BTreeSet<Segment>,
    pub registered_at: DateTime<Utc>,
}

impl Offer {
    pub fn new(
        restaurant_id: i64,
        offer_type: OfferType,
        offer_value: i64,
        segments: impl IntoIterator<Item = Segment>,
    ) -> Self {
        Self {
            restaurant_id,
            offer_type,
            offer_value,
            segments: segments.into_iter().collect(),
            registered_at: Utc::now(),
        }
    }

    /// Check whether users of `segment` are eligible
    pub fn applies_to(&self, segment: &Segment) -> bool {
        self.segments.contains(segment)
    }
}
