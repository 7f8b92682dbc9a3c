//! Metadata extraction.
//!
//! A single deterministic pass over the candidate's bytes:
//!
//! 1. Hex-encode the first `HEADER_BYTES_TO_READ` bytes into the
//!    magic-byte fingerprint. Short files encode only what exists; empty
//!    files yield an empty string. Never padded, never an error.
//! 2. Hash the full content (SHA-256) for a stable artifact identity.
//! 3. Derive the lower-cased extension from the name.
//! 4. If the file is plausibly textual, decode a bounded UTF-8 prefix as
//!    `sample_content`. Decoding failure drops the sample, nothing else.
//!
//! Extraction fails only when the handle itself cannot be read. Unknown
//! or binary content degrades gracefully: no sample, fingerprint intact.

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::ExtractionError;
use crate::intake::handle::FileHandle;
use crate::metadata::model::FileMetadata;
use crate::{HEADER_BYTES_TO_READ, SAMPLE_BYTES_TO_READ};

/// Extensions treated as textual even when no MIME type is declared.
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "log", "csv", "json", "xml", "html", "htm", "css", "js",
    "ts", "sh", "bat", "ps1", "py", "rb", "pl", "yaml", "yml", "toml",
    "ini", "cfg", "conf", "rs", "c", "h", "cpp", "java", "go",
];

/// Declared MIME types that are textual despite an `application/` prefix.
const TEXT_MIME_TYPES: &[&str] = &[
    "application/json",
    "application/javascript",
    "application/xml",
    "application/x-sh",
    "application/x-yaml",
    "application/toml",
];

/// Extract structural metadata from a file handle.
///
/// Suspends on the content read; everything after is pure computation
/// over the bytes, which are dropped before returning.
pub async fn extract(file: &FileHandle) -> Result<FileMetadata, ExtractionError> {
    let bytes = file.read_all().await?;

    let header_len = bytes.len().min(HEADER_BYTES_TO_READ);
    let magic_bytes = hex::encode(&bytes[..header_len]);

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let sha256 = hex::encode(hasher.finalize());

    let extension = derive_extension(file.name());

    let sample_content = if is_plausibly_textual(file.mime_type(), &extension) {
        decode_sample(&bytes)
    } else {
        None
    };

    debug!(
        name = file.name(),
        size = bytes.len(),
        has_sample = sample_content.is_some(),
        "extracted file metadata"
    );

    Ok(FileMetadata {
        name: file.name().to_string(),
        size: file.size(),
        mime_type: file.mime_type().to_string(),
        last_modified: file.last_modified_ms(),
        extension,
        magic_bytes,
        sha256,
        sample_content,
    })
}

/// Lower-cased substring after the last `.`; empty when there is none.
fn derive_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => String::new(),
    }
}

fn is_plausibly_textual(mime_type: &str, extension: &str) -> bool {
    if mime_type.starts_with("text/") {
        return true;
    }
    if TEXT_MIME_TYPES.contains(&mime_type) {
        return true;
    }
    TEXT_EXTENSIONS.contains(&extension)
}

/// Best-effort UTF-8 decode of a bounded prefix.
///
/// A char split by the prefix boundary is trimmed off; any other invalid
/// byte means the content is not text and no sample is produced.
fn decode_sample(bytes: &[u8]) -> Option<String> {
    let prefix = &bytes[..bytes.len().min(SAMPLE_BYTES_TO_READ)];
    match std::str::from_utf8(prefix) {
        Ok(s) => Some(s.to_string()),
        Err(e) if e.error_len().is_none() && e.valid_up_to() > 0 => {
            std::str::from_utf8(&prefix[..e.valid_up_to()])
                .ok()
                .map(|s| s.to_string())
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn handle(name: &str, mime: &str, bytes: &[u8]) -> FileHandle {
        FileHandle::from_bytes(name, mime, bytes)
    }

    #[tokio::test]
    async fn hello_fixture_matches_expected_fingerprint_and_sample() {
        let meta = extract(&handle("hello.txt", "text/plain", b"hello"))
            .await
            .unwrap();

        assert_eq!(meta.magic_bytes, "68656c6c6f");
        assert_eq!(meta.sample_content.as_deref(), Some("hello"));
        assert_eq!(meta.extension, "txt");
        assert_eq!(meta.size, 5);
        // echo -n "hello" | sha256sum
        assert_eq!(
            meta.sha256,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[tokio::test]
    async fn empty_file_yields_empty_fingerprint() {
        let meta = extract(&handle("empty.bin", "", b"")).await.unwrap();
        assert_eq!(meta.magic_bytes, "");
        assert_eq!(meta.sample_content, None);
    }

    #[tokio::test]
    async fn fingerprint_length_is_twice_min_of_window_and_size() {
        for len in [0usize, 1, 63, 64, 65, 1000] {
            let bytes = vec![0xA5u8; len];
            let meta = extract(&handle("blob.bin", "", bytes.as_slice()))
                .await
                .unwrap();
            assert_eq!(meta.magic_bytes.len(), 2 * len.min(HEADER_BYTES_TO_READ));
        }
    }

    #[tokio::test]
    async fn short_file_is_never_padded() {
        let meta = extract(&handle("tiny", "", &[0x00, 0xff])).await.unwrap();
        assert_eq!(meta.magic_bytes, "00ff");
    }

    #[test]
    fn extension_derivation_cases() {
        assert_eq!(derive_extension("report.PDF"), "pdf");
        assert_eq!(derive_extension("README"), "");
        assert_eq!(derive_extension("archive.tar.gz"), "gz");
        assert_eq!(derive_extension("trailing."), "");
    }

    #[tokio::test]
    async fn binary_content_degrades_to_no_sample() {
        // Textual extension, but the bytes are not UTF-8.
        let meta = extract(&handle("data.txt", "text/plain", &[0xc0, 0x80, 0xff]))
            .await
            .unwrap();
        assert_eq!(meta.sample_content, None);
        assert_eq!(meta.magic_bytes, "c080ff");
    }

    #[tokio::test]
    async fn non_textual_file_gets_no_sample_even_if_ascii() {
        let meta = extract(&handle("image.png", "image/png", b"plain ascii"))
            .await
            .unwrap();
        assert_eq!(meta.sample_content, None);
    }

    #[tokio::test]
    async fn sample_is_bounded_by_prefix_limit() {
        let bytes = vec![b'a'; SAMPLE_BYTES_TO_READ * 2];
        let meta = extract(&handle("big.txt", "text/plain", bytes.as_slice()))
            .await
            .unwrap();
        assert_eq!(
            meta.sample_content.as_ref().map(|s| s.len()),
            Some(SAMPLE_BYTES_TO_READ)
        );
    }

    #[tokio::test]
    async fn multibyte_char_split_at_the_boundary_is_trimmed() {
        // Fill up to one byte short of the limit, then a 2-byte char that
        // straddles it.
        let mut bytes = vec![b'x'; SAMPLE_BYTES_TO_READ - 1];
        bytes.extend_from_slice("é".as_bytes());
        let meta = extract(&handle("note.txt", "text/plain", bytes.as_slice()))
            .await
            .unwrap();
        assert_eq!(
            meta.sample_content.as_ref().map(|s| s.len()),
            Some(SAMPLE_BYTES_TO_READ - 1)
        );
    }

    #[tokio::test]
    async fn mime_allow_list_covers_application_json() {
        let meta = extract(&handle("payload", "application/json", b"{\"k\":1}"))
            .await
            .unwrap();
        assert_eq!(meta.sample_content.as_deref(), Some("{\"k\":1}"));
        assert_eq!(meta.extension, "");
    }

    #[tokio::test]
    async fn unreadable_handle_is_an_extraction_error() {
        let handle = FileHandle::from_path(std::path::Path::new("missing.bin")).await;
        assert!(handle.is_err());
    }

    #[tokio::test]
    async fn extraction_is_deterministic_for_identical_input() {
        let h = handle("a.txt", "text/plain", b"same bytes");
        let m1 = extract(&h).await.unwrap();
        let mut m2 = extract(&h).await.unwrap();
        m2.last_modified = m1.last_modified;
        assert_eq!(m1, m2);
    }
}
