pub mod error;
pub mod intake;
pub mod metadata;
pub mod pipeline;
pub mod report;
pub mod verdict;

pub const TOOL_NAME: &str = "fileguard";

/// Hard client-side ceiling on candidate file size.
/// The gate must reject before a single content byte is read.
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of leading bytes hex-encoded into the magic-byte fingerprint.
pub const HEADER_BYTES_TO_READ: usize = 64;

/// Upper bound on the text sample taken from plausibly-textual files.
pub const SAMPLE_BYTES_TO_READ: usize = 4096;
