use std::time::Duration;

use async_trait::async_trait;
use cartoffer_core::{CoreError, CoreResult, SegmentResolver};
use cartoffer_shared::Segment;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SegmentResponse {
    segment: String,
}

/// Client for the external user segment service.
///
/// Calls `GET {base_url}/api/v1/user_segment?user_id={id}` and expects
/// `{"segment": "<label>"}`. A 404 is an unknown user.
#[derive(Debug, Clone)]
pub struct HttpSegmentResolver {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSegmentResolver {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn service_error(err: reqwest::Error) -> CoreError {
    CoreError::SegmentServiceError(err.to_string())
}

#[async_trait]
impl SegmentResolver for HttpSegmentResolver {
    async fn resolve(&self, user_id: i64) -> CoreResult<Option<Segment>> {
        let url = format!("{}/api/v1/user_segment?user_id={}", self.base_url, user_id);

        let resp = self.client.get(&url).send().await.map_err(service_error)?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            debug!(user_id, "Segment service does not know user");
            return Ok(None);
        }

        let body: SegmentResponse = resp
            .error_for_status()
            .map_err(service_error)?
            .json()
            .await
            .map_err(service_error)?;

        debug!(user_id, segment = %body.segment, "Resolved user segment");
        Ok(Some(Segment::new(body.segment)))
    }
}
