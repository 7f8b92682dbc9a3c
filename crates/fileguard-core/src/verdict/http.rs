//! HTTP classifier backend.
//!
//! Packages the file content (base64) together with the full extracted
//! metadata into one JSON POST, and validates the response into
//! [`AnalysisResult`]. Exactly one outbound request per invocation; retry
//! and backoff belong to the caller.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ClassificationError;
use crate::intake::handle::FileHandle;
use crate::metadata::model::FileMetadata;
use crate::verdict::client::Classifier;
use crate::verdict::model::{AnalysisResult, VerdictWire};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/analyze";
pub const DEFAULT_HEALTH_URL: &str = "http://127.0.0.1:5000/health";

/// Request body sent to the classifier backend.
#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    metadata: &'a FileMetadata,
    /// Base64 of the exact bytes the metadata was extracted from.
    content: String,
}

#[derive(Debug, Deserialize)]
struct HealthWire {
    status: String,
}

/// Classifier backed by a remote HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: reqwest::Client,
    endpoint: String,
    health_url: String,
}

impl HttpClassifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            health_url: DEFAULT_HEALTH_URL.to_string(),
        }
    }

    pub fn with_health_url(mut self, health_url: impl Into<String>) -> Self {
        self.health_url = health_url.into();
        self
    }

    /// Probe the backend health route.
    ///
    /// Expects `{"status": "active", ...}`; anything else is reported as
    /// an unhealthy backend.
    pub async fn health(&self) -> Result<(), ClassificationError> {
        let resp = self.client.get(&self.health_url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ClassificationError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let health: HealthWire = serde_json::from_str(&body)?;
        if health.status != "active" {
            return Err(ClassificationError::Unhealthy(health.status));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Classifier for HttpClassifier {
    async fn classify(
        &self,
        file: &FileHandle,
        metadata: &FileMetadata,
    ) -> Result<AnalysisResult, ClassificationError> {
        let content = file.read_all().await?;

        let request = ClassifyRequest {
            metadata,
            content: BASE64.encode(&content),
        };
        drop(content);

        debug!(endpoint = %self.endpoint, name = file.name(), "sending classification request");

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClassificationError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        let wire: VerdictWire = serde_json::from_str(&body)?;
        Ok(wire.into())
    }
}
