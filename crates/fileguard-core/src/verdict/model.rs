//! Verdict model and wire-shape validation.
//!
//! The remote classifier is an opaque oracle; everything it returns is
//! validated into this model before the rest of the pipeline sees it.
//! Two coercions are mandatory on the response path:
//!
//! - an unrecognized threat-level string becomes [`ThreatLevel::Unknown`],
//!   never a raw value and never an error
//! - an out-of-range score is clamped into `[0, 100]`, never rejected
//!
//! Threat level and score are independent axes. A `SAFE` verdict with a
//! non-zero score is legal and must render as-is.

use serde::{Deserialize, Serialize};

/// Coarse classification bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatLevel {
    Safe,
    Suspicious,
    Dangerous,
    Unknown,
}

impl ThreatLevel {
    /// Parse a wire string, coercing anything unrecognized to `Unknown`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "SAFE" => Self::Safe,
            "SUSPICIOUS" => Self::Suspicious,
            "DANGEROUS" => Self::Dangerous,
            "UNKNOWN" => Self::Unknown,
            _ => Self::Unknown,
        }
    }

    /// CI-compatible exit code for the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Safe => 0,
            Self::Suspicious => 1,
            Self::Dangerous => 2,
            Self::Unknown => 3,
        }
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Safe => "SAFE",
            Self::Suspicious => "SUSPICIOUS",
            Self::Dangerous => "DANGEROUS",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// Validated verdict produced by the external classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub threat_level: ThreatLevel,

    /// 0 = safe, 100 = critical. Clamped, monotonic with severity but not
    /// required to align linearly with `threat_level`.
    pub score: u8,

    pub summary: String,

    /// Insertion order is display order.
    pub technical_details: Vec<String>,

    pub recommendation: String,
}

/// Raw response shape expected from the classifier.
///
/// `threat_level` stays a string and `score` a wide integer here so the
/// coercion rules above can run; any structural mismatch is a parse
/// failure at this boundary.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictWire {
    pub threat_level: String,
    pub score: i64,
    pub summary: String,
    pub technical_details: Vec<String>,
    pub recommendation: String,
}

impl From<VerdictWire> for AnalysisResult {
    fn from(wire: VerdictWire) -> Self {
        Self {
            threat_level: ThreatLevel::from_wire(&wire.threat_level),
            score: wire.score.clamp(0, 100) as u8,
            summary: wire.summary,
            technical_details: wire.technical_details,
            recommendation: wire.recommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(level: &str, score: i64) -> VerdictWire {
        VerdictWire {
            threat_level: level.into(),
            score,
            summary: "s".into(),
            technical_details: vec!["a".into(), "b".into()],
            recommendation: "r".into(),
        }
    }

    #[test]
    fn known_levels_parse_exactly() {
        assert_eq!(ThreatLevel::from_wire("SAFE"), ThreatLevel::Safe);
        assert_eq!(ThreatLevel::from_wire("SUSPICIOUS"), ThreatLevel::Suspicious);
        assert_eq!(ThreatLevel::from_wire("DANGEROUS"), ThreatLevel::Dangerous);
        assert_eq!(ThreatLevel::from_wire("UNKNOWN"), ThreatLevel::Unknown);
    }

    #[test]
    fn unrecognized_level_coerces_to_unknown() {
        assert_eq!(ThreatLevel::from_wire("CRITICAL"), ThreatLevel::Unknown);
        assert_eq!(ThreatLevel::from_wire("safe"), ThreatLevel::Unknown);
        assert_eq!(ThreatLevel::from_wire(""), ThreatLevel::Unknown);
    }

    #[test]
    fn level_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&ThreatLevel::Dangerous).unwrap(),
            "\"DANGEROUS\""
        );
    }

    #[test]
    fn score_is_clamped_not_rejected() {
        assert_eq!(AnalysisResult::from(wire("SAFE", -5)).score, 0);
        assert_eq!(AnalysisResult::from(wire("SAFE", 0)).score, 0);
        assert_eq!(AnalysisResult::from(wire("SAFE", 40)).score, 40);
        assert_eq!(AnalysisResult::from(wire("DANGEROUS", 100)).score, 100);
        assert_eq!(AnalysisResult::from(wire("DANGEROUS", 9000)).score, 100);
    }

    #[test]
    fn safe_with_nonzero_score_is_legal() {
        let r = AnalysisResult::from(wire("SAFE", 40));
        assert_eq!(r.threat_level, ThreatLevel::Safe);
        assert_eq!(r.score, 40);
    }

    #[test]
    fn technical_details_preserve_insertion_order() {
        let r = AnalysisResult::from(wire("SAFE", 0));
        assert_eq!(r.technical_details, vec!["a", "b"]);
    }

    #[test]
    fn exit_codes_track_severity() {
        assert_eq!(ThreatLevel::Safe.exit_code(), 0);
        assert_eq!(ThreatLevel::Suspicious.exit_code(), 1);
        assert_eq!(ThreatLevel::Dangerous.exit_code(), 2);
        assert_eq!(ThreatLevel::Unknown.exit_code(), 3);
    }

    #[test]
    fn wire_parse_rejects_missing_fields() {
        let err = serde_json::from_str::<VerdictWire>(r#"{"threatLevel":"SAFE"}"#);
        assert!(err.is_err());
    }
}
