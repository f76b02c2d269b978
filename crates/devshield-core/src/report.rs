//! Aggregate scan reports.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use devshield_types::Finding;

/// Summary of one full catalog run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostureReport {
    /// RFC 3339 timestamp of the scan.
    pub timestamp: String,
    /// Number of checks evaluated.
    pub checks_run: usize,
    /// Checks that found a vulnerability.
    pub vulnerable_count: usize,
    /// Applicable checks that found nothing.
    pub safe_count: usize,
    /// Checks that do not apply on this platform.
    pub not_applicable_count: usize,
    /// Whether the scan found no vulnerabilities.
    pub passed: bool,
    /// All findings, in catalog order.
    pub findings: Vec<Finding>,
}

impl PostureReport {
    /// Aggregate a list of findings into a report.
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        let vulnerable_count = findings.iter().filter(|f| f.vulnerable).count();
        let not_applicable_count = findings.iter().filter(|f| !f.applicable).count();
        let safe_count = findings
            .iter()
            .filter(|f| f.applicable && !f.vulnerable)
            .count();

        Self {
            timestamp: Utc::now().to_rfc3339(),
            checks_run: findings.len(),
            vulnerable_count,
            safe_count,
            not_applicable_count,
            passed: vulnerable_count == 0,
            findings,
        }
    }

    /// The findings that reported a vulnerability.
    pub fn vulnerable(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.vulnerable)
    }
}
