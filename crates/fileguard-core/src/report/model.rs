use serde::{Deserialize, Serialize};

use crate::metadata::model::FileMetadata;
use crate::verdict::model::AnalysisResult;

/// Tool metadata stamped onto every report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Envelope for a completed analysis: the extracted metadata plus the
/// validated verdict, exactly as committed to the `Complete` state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub tool: ToolInfo,
    pub metadata: FileMetadata,
    pub result: AnalysisResult,
}

impl ScanReport {
    pub fn new(tool: ToolInfo, metadata: FileMetadata, result: AnalysisResult) -> Self {
        Self {
            tool,
            metadata,
            result,
        }
    }
}
