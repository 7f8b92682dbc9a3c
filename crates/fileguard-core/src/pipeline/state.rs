//! Analysis lifecycle state.
//!
//! A single tagged union is the source of truth for the whole pipeline.
//! Illegal combinations (a completed analysis without a verdict, a result
//! without its metadata) are unrepresentable by construction; there are
//! no loading flags to drift out of sync.

use crate::intake::handle::FileHandle;
use crate::metadata::model::FileMetadata;
use crate::verdict::model::AnalysisResult;

/// Externally visible pipeline state.
///
/// Exactly one variant is active at any time. Transitions are
/// one-directional per request: `Idle → Analyzing → Complete | Error`,
/// with `reset` as the only way back to `Idle`. Partial results are never
/// exposed.
#[derive(Debug, Clone)]
pub enum AnalysisState {
    /// No file selected, nothing retained.
    Idle,

    /// Extraction/classification in flight for `file`.
    Analyzing { file: FileHandle },

    /// Both pipeline stages succeeded.
    Complete {
        file: FileHandle,
        metadata: FileMetadata,
        result: AnalysisResult,
    },

    /// A stage failed; `message` is the normalized failure description.
    /// The size gate fails before a file is worth retaining, so `file`
    /// is optional.
    Error {
        file: Option<FileHandle>,
        message: String,
    },
}

impl AnalysisState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self, Self::Analyzing { .. })
    }

    /// Terminal states accept a new `submit` without a prior `reset`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete { .. } | Self::Error { .. })
    }

    /// Short status label for logs and rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Analyzing { .. } => "analyzing",
            Self::Complete { .. } => "complete",
            Self::Error { .. } => "error",
        }
    }
}
