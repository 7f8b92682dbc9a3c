//! The classifier capability.
//!
//! The orchestrator depends on classification through this trait, not a
//! concrete backend. Tests swap in deterministic stubs; production wires
//! in [`crate::verdict::http::HttpClassifier`]. Implementations are
//! stateless from the pipeline's point of view: one outbound request per
//! invocation, no retry policy, a single failure surfaces immediately.

use async_trait::async_trait;

use crate::error::ClassificationError;
use crate::intake::handle::FileHandle;
use crate::metadata::model::FileMetadata;
use crate::verdict::model::AnalysisResult;

#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify a file given its content and extracted metadata.
    async fn classify(
        &self,
        file: &FileHandle,
        metadata: &FileMetadata,
    ) -> Result<AnalysisResult, ClassificationError>;
}
