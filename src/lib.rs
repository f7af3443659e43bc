pub mod analysis;
pub mod core;

pub use crate::analysis::analyze_batch;
pub use crate::analysis::content_similarity::content_similarity;
pub use crate::analysis::cross_access::{CrossAccessAnalyzer, CrossAccessReport};
pub use crate::analysis::path_similarity::path_similarity;
pub use crate::analysis::sequential_ids::{IdObservation, IdSource, SequentialIdDetector};
pub use crate::analysis::user_data::{UserDataExtractor, UserDataKind, UserDataMatch};
pub use crate::core::finding::Finding;
pub use crate::core::record::ResponseRecord;
pub use crate::core::remediation::{lookup_remediation, Framework, RemediationTopic};
pub use crate::core::reporter::Reporter;
pub use crate::core::{FindingType, Severity};
