use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{FindingType, Severity};

/// A single piece of heuristic evidence that access control may be broken.
///
/// Immutable once produced; ownership transfers to whoever reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub finding_type: FindingType,
    pub severity: Severity,
    pub title: String,
    /// URL the finding is anchored on, for deduplication and reporting.
    pub url: String,
    /// Structured, heuristic-specific evidence.
    pub evidence: Value,
}

impl Finding {
    pub fn new(
        finding_type: FindingType,
        severity: Severity,
        title: impl Into<String>,
        url: impl Into<String>,
        evidence: Value,
    ) -> Self {
        Self {
            finding_type,
            severity,
            title: title.into(),
            url: url.into(),
            evidence,
        }
    }
}
