pub mod finding;
pub mod record;
pub mod remediation;
pub mod reporter;

use serde::{Deserialize, Serialize};

/// Finding classification for access-control reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingType {
    Idor,
    CrossAccountExposure,
}

impl FindingType {
    /// Short tag used for deduplication keys and remediation lookup.
    pub fn tag(&self) -> &'static str {
        match self {
            FindingType::Idor => "idor_suspect",
            FindingType::CrossAccountExposure => "authorize_probe",
        }
    }
}

impl std::fmt::Display for FindingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingType::Idor => write!(f, "IDOR"),
            FindingType::CrossAccountExposure => write!(f, "Cross-Account Exposure"),
        }
    }
}

/// Severity scale for findings. Final scoring policy belongs to the consumer;
/// each heuristic only assigns the level it is defined with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}
