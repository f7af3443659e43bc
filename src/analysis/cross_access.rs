use log::debug;

use crate::analysis::content_similarity::content_similarity;
use crate::analysis::user_data::{UserDataExtractor, UserDataMatch};
use crate::core::record::ResponseRecord;

/// Outcome of comparing two responses captured under different identities.
#[derive(Debug, Clone)]
pub struct CrossAccessReport {
    /// True iff some user-data kind appears in both responses with
    /// differing matched values.
    pub suggests_cross_access: bool,
    pub data_a: UserDataMatch,
    pub data_b: UserDataMatch,
    pub content_similarity: f64,
}

/// Flags likely cross-account data exposure across a response pair.
///
/// If the same endpoint shape returns user-identifying data and the values
/// differ between two sessions, one session is probably seeing the other's
/// records.
pub struct CrossAccessAnalyzer {
    extractor: UserDataExtractor,
}

impl CrossAccessAnalyzer {
    pub fn new() -> Self {
        Self {
            extractor: UserDataExtractor::new(),
        }
    }

    pub fn analyze(&self, response_a: &ResponseRecord, response_b: &ResponseRecord) -> CrossAccessReport {
        let data_a = self.extractor.extract(response_a.body_text());
        let data_b = self.extractor.extract(response_b.body_text());
        let similarity = content_similarity(response_a.body_text(), response_b.body_text());

        // Kind-definition order (BTreeMap over the enum), stopping at the
        // first kind present on both sides with differing value sequences.
        let mut suggests = false;
        for (kind, values_a) in &data_a {
            if let Some(values_b) = data_b.get(kind) {
                if values_a != values_b {
                    debug!(
                        "cross-access signal: {} differs ({:?} vs {:?}) between {} and {}",
                        kind, values_a, values_b, response_a.url, response_b.url
                    );
                    suggests = true;
                    break;
                }
            }
        }

        CrossAccessReport {
            suggests_cross_access: suggests,
            data_a,
            data_b,
            content_similarity: similarity,
        }
    }
}

impl Default for CrossAccessAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
