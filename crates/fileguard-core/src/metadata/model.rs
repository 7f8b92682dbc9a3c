use serde::{Deserialize, Serialize};

/// Structural metadata derived from a candidate file.
///
/// Immutable once computed, and part of the classifier wire contract:
/// field names serialize in camelCase to match the backend payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub name: String,

    /// Byte size as reported by the file handle.
    pub size: u64,

    /// Declared MIME type. May be empty and is never trusted on its own.
    pub mime_type: String,

    /// Modification time, milliseconds since the Unix epoch.
    pub last_modified: i64,

    /// Lower-cased substring after the last `.` in `name`; empty if none.
    pub extension: String,

    /// Hex encoding of the first `min(64, size)` content bytes.
    /// Always `2 × min(64, size)` characters; empty for an empty file.
    pub magic_bytes: String,

    /// SHA-256 over the full content, hex-encoded. Stable identity for
    /// the exact bytes that were classified.
    pub sha256: String,

    /// Bounded text sample, present only when the file is plausibly
    /// textual and the prefix decodes as UTF-8.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_content: Option<String>,
}
