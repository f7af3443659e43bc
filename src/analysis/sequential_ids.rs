use log::debug;
use regex::{Regex, RegexBuilder};
use serde_json::json;
use url::Url;

use crate::core::finding::Finding;
use crate::core::record::ResponseRecord;
use crate::core::{FindingType, Severity};

/// Minimum harvested identifiers before the batch carries any signal.
const MIN_OBSERVATIONS: usize = 3;
/// Minimum unit-step adjacencies in the sorted id list to raise a finding;
/// two pairs means at least three sequentially allocated ids.
const MIN_SEQUENTIAL_PAIRS: usize = 2;
/// How many sorted ids to include in evidence.
const EVIDENCE_ID_LIMIT: usize = 10;

/// Where a harvested identifier came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdSource {
    Url,
    Body,
}

/// A numeric identifier harvested from a captured response, with enough
/// provenance to walk a finding back to the responses that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdObservation {
    pub value: u64,
    pub response_index: usize,
    pub source: IdSource,
}

/// Scans a batch of responses for predictable, sequentially allocated
/// numeric identifiers.
///
/// Sequential allocation means a captured id can be decremented or
/// incremented to reach another principal's record, which is the enabling
/// condition for IDOR probing. This is a batch operation: the whole capture
/// window must be collected before calling [`detect`](Self::detect).
pub struct SequentialIdDetector {
    body_id_pattern: Regex,
}

impl SequentialIdDetector {
    pub fn new() -> Self {
        let body_id_pattern =
            RegexBuilder::new(r#"\b(?:user_id|account_id|id)["']?\s*[:=]\s*["']?(\d+)"#)
                .case_insensitive(true)
                .build()
                .expect("body id pattern is valid");
        Self { body_id_pattern }
    }

    /// Harvests every numeric id in the batch, then counts unit steps in the
    /// sorted value list. At most one finding is produced per call.
    pub fn detect(&self, responses: &[ResponseRecord]) -> Vec<Finding> {
        let observations = self.harvest(responses);

        if observations.len() < MIN_OBSERVATIONS {
            debug!(
                "sequential-id check: only {} id(s) harvested from {} response(s), skipping",
                observations.len(),
                responses.len()
            );
            return Vec::new();
        }

        let mut sorted: Vec<u64> = observations.iter().map(|o| o.value).collect();
        sorted.sort_unstable();

        let sequential_count = sorted
            .windows(2)
            .filter(|pair| pair[1] - pair[0] == 1)
            .count();

        if sequential_count < MIN_SEQUENTIAL_PAIRS {
            return Vec::new();
        }

        let mut source_responses: Vec<usize> =
            observations.iter().map(|o| o.response_index).collect();
        source_responses.sort_unstable();
        source_responses.dedup();

        let evidence = json!({
            "ids": sorted.iter().take(EVIDENCE_ID_LIMIT).collect::<Vec<_>>(),
            "sequential_count": sequential_count,
            "source_responses": source_responses,
        });

        vec![Finding::new(
            FindingType::Idor,
            Severity::Medium,
            "Sequential ID pattern detected",
            responses.first().map(|r| r.url.clone()).unwrap_or_default(),
            evidence,
        )]
    }

    /// Flat observation list: response order, URL ids before body ids within
    /// each response.
    pub fn harvest(&self, responses: &[ResponseRecord]) -> Vec<IdObservation> {
        let mut observations = Vec::new();

        for (index, response) in responses.iter().enumerate() {
            for value in harvest_url_ids(&response.url) {
                observations.push(IdObservation {
                    value,
                    response_index: index,
                    source: IdSource::Url,
                });
            }
            for caps in self.body_id_pattern.captures_iter(response.body_text()) {
                if let Some(m) = caps.get(1) {
                    if let Ok(value) = m.as_str().parse::<u64>() {
                        observations.push(IdObservation {
                            value,
                            response_index: index,
                            source: IdSource::Body,
                        });
                    }
                }
            }
        }

        observations
    }
}

impl Default for SequentialIdDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric path segments of a URL, i.e. segments terminated by `/`, the end
/// of the path, or the query string. Unparseable URLs degrade to splitting
/// the raw string with any query/fragment stripped.
fn harvest_url_ids(url: &str) -> Vec<u64> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => {
            let end = url.find(['?', '#']).unwrap_or(url.len());
            url[..end].to_string()
        }
    };

    path.split('/')
        .filter(|seg| !seg.is_empty() && seg.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|seg| seg.parse::<u64>().ok())
        .collect()
}
