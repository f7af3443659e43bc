use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};

/// Categories of user-identifying data the extractor looks for.
///
/// Declaration order is significant: it is the order patterns are applied
/// and the order `CrossAccessAnalyzer` walks when comparing two extractions,
/// which keeps its short-circuit deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserDataKind {
    UserId,
    AccountNumber,
    Email,
    Name,
}

impl UserDataKind {
    pub const ALL: [UserDataKind; 4] = [
        UserDataKind::UserId,
        UserDataKind::AccountNumber,
        UserDataKind::Email,
        UserDataKind::Name,
    ];

    fn pattern(&self) -> &'static str {
        match self {
            // Key/value forms: user_id: 42, "userId": "42", user-id=42
            UserDataKind::UserId => r#"user[_-]?id["']?\s*[:=]\s*["']?([A-Za-z0-9_-]+)"#,
            UserDataKind::AccountNumber => {
                r#"account[_-]?(?:number|no|num)["']?\s*[:=]\s*["']?([A-Za-z0-9_-]+)"#
            }
            UserDataKind::Email => r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
            // Name-like fields: "name": "Alice", full_name = Bob
            UserDataKind::Name => {
                r#"(?:full[_-]?name|user[_-]?name|name)["']?\s*[:=]\s*["']?([A-Za-z][A-Za-z .'-]*)"#
            }
        }
    }
}

impl std::fmt::Display for UserDataKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserDataKind::UserId => write!(f, "user_id"),
            UserDataKind::AccountNumber => write!(f, "account_number"),
            UserDataKind::Email => write!(f, "email"),
            UserDataKind::Name => write!(f, "name"),
        }
    }
}

/// Per-pattern matches in document order, duplicates preserved. Kinds that
/// matched nothing are absent from the map entirely.
pub type UserDataMatch = BTreeMap<UserDataKind, Vec<String>>;

/// Pulls user-identifying substrings out of a response body.
///
/// All patterns are compiled once at construction; the registry is
/// enumerable via [`UserDataKind::ALL`] so callers and tests can see which
/// kinds exist without inspecting regex source.
pub struct UserDataExtractor {
    patterns: Vec<(UserDataKind, Regex)>,
}

impl UserDataExtractor {
    pub fn new() -> Self {
        let patterns = UserDataKind::ALL
            .iter()
            .map(|kind| {
                let regex = RegexBuilder::new(kind.pattern())
                    .case_insensitive(true)
                    .build()
                    .unwrap_or_else(|e| panic!("invalid {} pattern: {}", kind, e));
                (*kind, regex)
            })
            .collect();
        Self { patterns }
    }

    /// Runs every pattern over the body independently; non-overlapping
    /// matches are collected in document order.
    pub fn extract(&self, body: &str) -> UserDataMatch {
        let mut matches = UserDataMatch::new();
        if body.is_empty() {
            return matches;
        }

        for (kind, regex) in &self.patterns {
            let values: Vec<String> = regex
                .captures_iter(body)
                .map(|caps| {
                    // Patterns with a capture group yield the value; bare
                    // patterns (email) yield the whole match.
                    caps.get(1)
                        .or_else(|| caps.get(0))
                        .map(|m| m.as_str().trim().to_string())
                        .unwrap_or_default()
                })
                .filter(|v| !v.is_empty())
                .collect();

            if !values.is_empty() {
                matches.insert(*kind, values);
            }
        }

        matches
    }
}

impl Default for UserDataExtractor {
    fn default() -> Self {
        Self::new()
    }
}
