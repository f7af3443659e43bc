use std::collections::HashSet;
use std::io::Write;

use colored::*;
use log::warn;
use url::Url;

use crate::core::finding::Finding;
use crate::core::remediation::lookup_remediation;

/// Builds a deduplication key from URL base path + finding type.
fn build_dedup_key(url: &str, type_tag: &str) -> String {
    let base_url = if let Ok(parsed) = Url::parse(url) {
        format!(
            "{}://{}{}",
            parsed.scheme(),
            parsed.host_str().unwrap_or(""),
            parsed.path()
        )
    } else {
        url.to_string()
    };

    format!("{}|{}", base_url, type_tag)
}

/// Collects, deduplicates, and reports findings.
///
/// Findings are appended to the output path as JSON lines and echoed to the
/// terminal together with remediation guidance.
pub struct Reporter {
    seen: HashSet<String>,
    findings: Vec<Finding>,
    framework: Option<String>,
}

impl Reporter {
    pub fn new(framework: Option<String>) -> Self {
        Self {
            seen: HashSet::new(),
            findings: Vec::new(),
            framework,
        }
    }

    /// Accepts a finding unless an equivalent one (same base URL + type) was
    /// already reported. Returns whether it was kept.
    pub fn record(&mut self, finding: Finding) -> bool {
        let key = build_dedup_key(&finding.url, finding.finding_type.tag());
        if !self.seen.insert(key) {
            return false;
        }
        self.print_finding(&finding);
        self.findings.push(finding);
        true
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Appends all recorded findings to `output_path` as JSON lines.
    pub fn write_jsonl(&self, output_path: &str) -> anyhow::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(output_path)?;
        for finding in &self.findings {
            match serde_json::to_string(finding) {
                Ok(line) => writeln!(file, "{}", line)?,
                Err(e) => warn!("failed to serialize finding: {}", e),
            }
        }
        Ok(())
    }

    fn print_finding(&self, finding: &Finding) {
        let out = |text: &str| {
            print!("{}\r\n", text);
            std::io::stdout().flush().ok();
        };
        out(&format!(
            "\n{} {} detected!",
            "[+]".green().bold(),
            finding.finding_type.to_string().red().bold()
        ));
        out(&format!("    Target:   {}", finding.url.white()));
        out(&format!(
            "    Severity: {}",
            finding.severity.to_string().bright_yellow()
        ));
        out(&format!("    Title:    {}", finding.title));
        if let Ok(evidence) = serde_json::to_string(&finding.evidence) {
            out(&format!("    Evidence: {}", evidence.dimmed()));
        }
        if let Some(advice) =
            lookup_remediation(finding.finding_type.tag(), self.framework.as_deref())
        {
            out(&format!("    Fix:      {}", advice.cyan()));
        }
        out(&"──────────────────────────────────────────".dimmed().to_string());
    }

    pub fn print_summary(&self) {
        let out = |text: &str| {
            print!("{}\r\n", text);
            std::io::stdout().flush().ok();
        };
        if self.findings.is_empty() {
            out(&format!("{}", "[+] No access-control findings.".green()));
        } else {
            out(&format!(
                "{}",
                format!("[+] {} finding(s) discovered:", self.findings.len())
                    .yellow()
                    .bold()
            ));
            for (i, finding) in self.findings.iter().enumerate() {
                out(&format!(
                    "  #{} {} ({}) -> {}",
                    i + 1,
                    finding.finding_type,
                    finding.severity,
                    finding.url
                ));
            }
        }
    }
}
