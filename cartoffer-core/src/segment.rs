use std::collections::HashMap;

use async_trait::async_trait;
use cartoffer_shared::Segment;

use crate::CoreResult;

/// Resolves the targeting segment of a user
#[async_trait]
pub trait SegmentResolver: Send + Sync {
    /// `Ok(None)` means the user has no known segment.
    async fn resolve(&self, user_id: i64) -> CoreResult<Option<Segment>>;
}

/// Resolver backed by a fixed user table, typically loaded from config
#[derive(Debug, Clone, Default)]
pub struct StaticSegmentResolver {
    users: HashMap<i64, Segment>,
}

impl StaticSegmentResolver {
    pub fn new(users: HashMap<i64, Segment>) -> Self {
        Self { users }
    }

    pub fn with_user(mut self, user_id: i64, segment: impl Into<Segment>) -> Self {
        self.users.insert(user_id, segment.into());
        self
    }
}

#[async_trait]
impl SegmentResolver for StaticSegmentResolver {
    async fn resolve(&self, user_id: i64) -> CoreResult<Option<Segment>> {
        let segment = self.users.get(&user_id).cloned();
        tracing::debug!(user_id, segment = ?segment, "Resolved user segment from static table");
        Ok(segment)
    }
}
