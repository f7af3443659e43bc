//! Remediation knowledge base keyed by a closed set of finding topics, with
//! optional framework-specific overlays. Both tables are fixed at compile
//! time; a lookup miss is an explicit `None`, never a silent fallback entry.

/// The closed set of topics remediation text exists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemediationTopic {
    Endpoint,
    ParamToggle,
    AuthorizeProbe,
    IdorSuspect,
    CorsHeader,
}

impl RemediationTopic {
    pub const ALL: [RemediationTopic; 5] = [
        RemediationTopic::Endpoint,
        RemediationTopic::ParamToggle,
        RemediationTopic::AuthorizeProbe,
        RemediationTopic::IdorSuspect,
        RemediationTopic::CorsHeader,
    ];

    /// Tag matched against finding-type strings.
    pub fn tag(&self) -> &'static str {
        match self {
            RemediationTopic::Endpoint => "endpoint",
            RemediationTopic::ParamToggle => "param_toggle",
            RemediationTopic::AuthorizeProbe => "authorize_probe",
            RemediationTopic::IdorSuspect => "idor_suspect",
            RemediationTopic::CorsHeader => "cors_header",
        }
    }

    fn advice(&self) -> &'static str {
        match self {
            RemediationTopic::Endpoint => {
                "Require authentication on every endpoint that serves per-user data; \
                 deny by default and allow-list public routes explicitly."
            }
            RemediationTopic::ParamToggle => {
                "Never trust client-supplied role or feature toggles; derive privileges \
                 from the server-side session, not request parameters."
            }
            RemediationTopic::AuthorizeProbe => {
                "Enforce object-level authorization on every access: verify the \
                 authenticated principal owns or is granted the requested resource."
            }
            RemediationTopic::IdorSuspect => {
                "Replace sequential numeric identifiers with non-guessable ones (UUIDs) \
                 and check ownership server-side on each object lookup."
            }
            RemediationTopic::CorsHeader => {
                "Restrict Access-Control-Allow-Origin to an explicit allow-list and \
                 never combine a wildcard origin with credentialed requests."
            }
        }
    }
}

/// Frameworks the registry carries specific guidance for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framework {
    Wordpress,
    Laravel,
    NodeExpress,
}

impl Framework {
    pub const ALL: [Framework; 3] = [
        Framework::Wordpress,
        Framework::Laravel,
        Framework::NodeExpress,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Framework::Wordpress => "wordpress",
            Framework::Laravel => "laravel",
            Framework::NodeExpress => "node-express",
        }
    }

    fn overlay(&self) -> &'static str {
        match self {
            Framework::Wordpress => {
                "WordPress: wrap handlers in current_user_can() checks and verify \
                 nonces with check_ajax_referer()."
            }
            Framework::Laravel => {
                "Laravel: enforce policies via $this->authorize() or Gate::allows() \
                 in every controller action touching user-owned models."
            }
            Framework::NodeExpress => {
                "Express: add per-route authorization middleware that loads the \
                 resource and compares its owner to req.user before the handler runs."
            }
        }
    }
}

/// Remediation text for a finding-type string, plus at most one framework
/// overlay.
///
/// Matching is case-insensitive substring containment: the first topic whose
/// tag occurs in the finding type wins, and the first framework whose tag
/// occurs in the detected framework string contributes the overlay.
pub fn lookup_remediation(finding_type: &str, framework: Option<&str>) -> Option<String> {
    let type_lower = finding_type.to_lowercase();
    let topic = RemediationTopic::ALL
        .iter()
        .find(|topic| type_lower.contains(topic.tag()))?;

    let mut text = topic.advice().to_string();

    if let Some(framework) = framework {
        let framework_lower = framework.to_lowercase();
        if let Some(hint) = Framework::ALL
            .iter()
            .find(|f| framework_lower.contains(f.tag()))
        {
            text.push(' ');
            text.push_str(hint.overlay());
        }
    }

    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_tag_matches() {
        for topic in RemediationTopic::ALL {
            assert_eq!(
                lookup_remediation(topic.tag(), None),
                Some(topic.advice().to_string())
            );
        }
    }

    #[test]
    fn test_substring_and_case_insensitive_match() {
        let text = lookup_remediation("IDOR_SUSPECT_param", None);
        assert_eq!(text, Some(RemediationTopic::IdorSuspect.advice().to_string()));
    }

    #[test]
    fn test_unknown_type_is_none() {
        assert_eq!(lookup_remediation("sql_injection", None), None);
    }

    #[test]
    fn test_framework_overlay_appended() {
        let text = lookup_remediation("idor_suspect", Some("Laravel 10.x")).unwrap();
        assert!(text.starts_with(RemediationTopic::IdorSuspect.advice()));
        assert!(text.contains("Gate::allows()"));
    }

    #[test]
    fn test_unrecognized_framework_applies_no_overlay() {
        let plain = lookup_remediation("idor_suspect", None).unwrap();
        let with_unknown = lookup_remediation("idor_suspect", Some("django")).unwrap();
        assert_eq!(plain, with_unknown);
    }

    #[test]
    fn test_first_topic_match_wins() {
        // Type string containing two tags resolves to the earlier table entry.
        let text = lookup_remediation("endpoint idor_suspect", None).unwrap();
        assert_eq!(text, RemediationTopic::Endpoint.advice());
    }
}
