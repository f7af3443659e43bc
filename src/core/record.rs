use serde::{Deserialize, Serialize};

/// A single captured HTTP response, as supplied by the scanning collaborator.
///
/// The body is a first-class optional field: a capture with no body (HEAD
/// request, empty 204, truncated capture) deserializes cleanly and every
/// analyzer treats it as "no content" rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub url: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Label of the identity/session the capture was taken under, when the
    /// collaborator knows it. Carried through to evidence, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
}

impl ResponseRecord {
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: Some(body.into()),
            identity: None,
        }
    }

    /// Body text, with an absent body reading as empty.
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}
