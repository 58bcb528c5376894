//! Compliance flags and the verification outcome derived from them.

use serde::{Deserialize, Serialize};

/// Sign-off of the two bodies a certificate must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificateCompliance {
    /// Rwanda Environment Management Authority verification.
    pub verified_by_rema: bool,
    /// International Conference on the Great Lakes Region compliance.
    pub icglr_compliant: bool,
}

impl CertificateCompliance {
    pub fn fully_verified(self) -> bool {
        self.verified_by_rema && self.icglr_compliant
    }

    pub fn outcome(self) -> VerificationOutcome {
        if self.fully_verified() {
            VerificationOutcome::Verified
        } else {
            VerificationOutcome::ComplianceIssues
        }
    }
}

/// Result of looking up a certificate that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    Verified,
    ComplianceIssues,
}

/// Per-scheme regional compliance of a company.
///
/// Wire and storage format is a JSON object keyed by scheme acronym:
/// `{"AU": true, "REMA": true, "ICGLR": false, "COMESA": true}`.
/// Missing keys read as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionalCompliance {
    #[serde(rename = "AU", default)]
    pub au: bool,
    #[serde(rename = "REMA", default)]
    pub rema: bool,
    #[serde(rename = "ICGLR", default)]
    pub icglr: bool,
    #[serde(rename = "COMESA", default)]
    pub comesa: bool,
}
