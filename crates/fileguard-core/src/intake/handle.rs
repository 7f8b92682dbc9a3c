//! Generic file handles for the intake boundary.
//!
//! A [`FileHandle`] carries the attributes every acquisition path can
//! provide up front (name, size, declared MIME type, modification time)
//! plus a lazily-read content source. Size and attributes are available
//! without touching content, which is what lets the gate run before any
//! byte is read.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ExtractionError;

/// Where the handle's bytes come from.
///
/// Disk handles re-read on every access so no content is retained after a
/// pipeline run; in-memory handles share their buffer.
#[derive(Debug, Clone)]
enum Source {
    Disk(PathBuf),
    Memory(Arc<[u8]>),
}

/// A candidate file as seen by the pipeline.
///
/// Cloning is cheap: the disk variant clones a path, the memory variant
/// bumps a refcount.
#[derive(Debug, Clone)]
pub struct FileHandle {
    name: String,
    size: u64,
    mime_type: String,
    last_modified_ms: i64,
    source: Source,
}

impl FileHandle {
    /// Build a handle from a file on disk.
    ///
    /// Stats the file for size and mtime; content is not read here. The
    /// declared MIME type is left empty — disk files carry no declaration
    /// and downstream treats the field as unreliable anyway.
    pub async fn from_path(path: &Path) -> Result<Self, ExtractionError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let meta = tokio::fs::metadata(path).await.map_err(|e| ExtractionError {
            name: name.clone(),
            source: e,
        })?;

        let last_modified_ms = meta
            .modified()
            .ok()
            .and_then(system_time_to_ms)
            .unwrap_or(0);

        Ok(Self {
            name,
            size: meta.len(),
            mime_type: String::new(),
            last_modified_ms,
            source: Source::Disk(path.to_path_buf()),
        })
    }

    /// Build an in-memory handle (bundled samples, tests, extension popup).
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        let bytes = bytes.into();
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            mime_type: mime_type.into(),
            last_modified_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as i64)
                .unwrap_or(0),
            source: Source::Memory(bytes),
        }
    }

    /// Override the declared MIME type (e.g. a CLI `--mime` flag).
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Byte size as declared by the acquisition path, available pre-read.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Declared MIME type; may be empty and must not be trusted.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Modification time in milliseconds since the Unix epoch.
    pub fn last_modified_ms(&self) -> i64 {
        self.last_modified_ms
    }

    /// Read the full content.
    pub async fn read_all(&self) -> Result<Vec<u8>, ExtractionError> {
        let bytes = match &self.source {
            Source::Disk(path) => {
                tokio::fs::read(path).await.map_err(|e| self.io_error(e))?
            }
            Source::Memory(bytes) => bytes.to_vec(),
        };
        Ok(bytes)
    }

    /// Read at most `limit` leading bytes.
    pub async fn read_prefix(&self, limit: usize) -> Result<Vec<u8>, ExtractionError> {
        match &self.source {
            Source::Disk(path) => {
                use tokio::io::AsyncReadExt;

                let file = tokio::fs::File::open(path)
                    .await
                    .map_err(|e| self.io_error(e))?;
                let mut buf = Vec::with_capacity(limit);
                file.take(limit as u64)
                    .read_to_end(&mut buf)
                    .await
                    .map_err(|e| self.io_error(e))?;
                Ok(buf)
            }
            Source::Memory(bytes) => Ok(bytes[..bytes.len().min(limit)].to_vec()),
        }
    }

    fn io_error(&self, source: io::Error) -> ExtractionError {
        ExtractionError {
            name: self.name.clone(),
            source,
        }
    }
}

fn system_time_to_ms(t: SystemTime) -> Option<i64> {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => i64::try_from(d.as_millis()).ok(),
        // Pre-epoch mtimes exist on badly-stamped archives.
        Err(e) => i64::try_from(e.duration().as_millis()).ok().map(|ms| -ms),
    }
}
