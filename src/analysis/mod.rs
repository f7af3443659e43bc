pub mod content_similarity;
pub mod cross_access;
pub mod path_similarity;
pub mod sequential_ids;
pub mod user_data;

use log::debug;
use serde_json::json;

use crate::core::finding::Finding;
use crate::core::record::ResponseRecord;
use crate::core::{FindingType, Severity};
use self::cross_access::CrossAccessAnalyzer;
use self::path_similarity::path_similarity;
use self::sequential_ids::SequentialIdDetector;

/// Runs the full heuristic pipeline over one analysis window.
///
/// Batch-wide sequential-id detection first, then cross-account comparison
/// of every record pair whose URL paths score at least
/// `min_path_similarity`. Pure and synchronous; duplicates are left for the
/// reporter to fold.
pub fn analyze_batch(records: &[ResponseRecord], min_path_similarity: f64) -> Vec<Finding> {
    let mut findings = SequentialIdDetector::new().detect(records);

    let analyzer = CrossAccessAnalyzer::new();
    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            let score = path_similarity(&records[i].url, &records[j].url);
            debug!("pair ({}, {}): path similarity {:.2}", i, j, score);
            if score < min_path_similarity {
                continue;
            }

            let report = analyzer.analyze(&records[i], &records[j]);
            if !report.suggests_cross_access {
                continue;
            }

            let evidence = json!({
                "pair": [i, j],
                "urls": [&records[i].url, &records[j].url],
                "identities": [&records[i].identity, &records[j].identity],
                "path_similarity": score,
                "content_similarity": report.content_similarity,
                "data_a": report.data_a,
                "data_b": report.data_b,
            });
            findings.push(Finding::new(
                FindingType::CrossAccountExposure,
                Severity::High,
                "User-identifying data differs across matching endpoints",
                records[i].url.clone(),
                evidence,
            ));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(url: &str, body: &str) -> ResponseRecord {
        ResponseRecord::new(url, body)
    }

    #[test]
    fn test_batch_raises_both_finding_kinds() {
        let batch = vec![
            record("https://x.com/api/users/10", "user_id: 10"),
            record("https://x.com/api/users/11", "user_id: 11"),
            record("https://x.com/api/users/12", "user_id: 12"),
            record("https://x.com/api/users/13", "user_id: 13"),
        ];
        let findings = analyze_batch(&batch, 0.8);

        assert!(findings
            .iter()
            .any(|f| f.finding_type == FindingType::Idor));
        assert!(findings
            .iter()
            .any(|f| f.finding_type == FindingType::CrossAccountExposure));
    }

    #[test]
    fn test_dissimilar_paths_are_never_cross_compared() {
        let batch = vec![
            record("https://x.com/api/users/profile", "user_id: 7"),
            record("https://x.com/static/logo.png", "user_id: 9"),
        ];
        let findings = analyze_batch(&batch, 0.8);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_empty_batch_is_empty() {
        assert!(analyze_batch(&[], 0.8).is_empty());
    }

    #[test]
    fn test_cross_access_evidence_carries_pair_indices() {
        let batch = vec![
            record("https://x.com/api/profile", "user_id: 7"),
            record("https://x.com/api/profile", "user_id: 9"),
        ];
        let findings = analyze_batch(&batch, 0.8);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].evidence["pair"], json!([0, 1]));
        assert_eq!(findings[0].severity, Severity::High);
    }
}
