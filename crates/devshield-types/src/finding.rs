//! Normalized check outputs.
//!
//! A [`Finding`] is the immutable result of one detector evaluation. The
//! bridge flattens it into a [`WireVerdict`], the exact three-field record
//! the host method channel expects.

use serde::{Deserialize, Serialize};

use crate::check::CheckKind;

/// The result of evaluating one security check.
///
/// `applicable = false` marks checks that are meaningless on the current
/// platform (e.g. USB debugging on iOS). Such findings are still returned,
/// never dropped, so the caller always gets one finding per requested check.
///
/// Construction goes through [`Finding::new`] or [`Finding::not_applicable`],
/// both of which require a non-empty message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Category of the check that produced this finding.
    #[serde(rename = "type")]
    pub kind: CheckKind,
    /// Whether the check found the device/app vulnerable.
    #[serde(rename = "isVulnerable")]
    pub vulnerable: bool,
    /// Human-readable explanation, always non-empty.
    pub message: String,
    /// Whether the check is meaningful on the current platform.
    pub applicable: bool,
}

impl Finding {
    /// Create a finding for an applicable check.
    ///
    /// Panics if `message` is empty; every finding must explain itself.
    pub fn new(kind: CheckKind, vulnerable: bool, message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(!message.is_empty(), "finding message must be non-empty");
        Self {
            kind,
            vulnerable,
            message,
            applicable: true,
        }
    }

    /// Create a finding for a check that does not apply on this platform.
    ///
    /// Inapplicable checks are never vulnerable; the message says why they
    /// do not apply.
    pub fn not_applicable(kind: CheckKind, message: impl Into<String>) -> Self {
        let message = message.into();
        assert!(!message.is_empty(), "finding message must be non-empty");
        Self {
            kind,
            vulnerable: false,
            message,
            applicable: false,
        }
    }

    /// Flatten into the three-field wire record.
    pub fn to_wire(&self) -> WireVerdict {
        WireVerdict {
            check_type: self.kind.wire_name().to_string(),
            is_vulnerable: self.vulnerable,
            message: self.message.clone(),
        }
    }
}

/// The exact record the host bridge serializes back to the caller.
///
/// Field names are pinned to the wire contract:
/// `{"type": ..., "isVulnerable": ..., "message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireVerdict {
    #[serde(rename = "type")]
    pub check_type: String,
    #[serde(rename = "isVulnerable")]
    pub is_vulnerable: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_finding_is_applicable() {
        let f = Finding::new(CheckKind::DebuggableApp, true, "App is debuggable");
        assert!(f.applicable);
        assert!(f.vulnerable);
        assert_eq!(f.kind, CheckKind::DebuggableApp);
    }

    #[test]
    fn not_applicable_is_never_vulnerable() {
        let f = Finding::not_applicable(CheckKind::UsbDebugging, "Not applicable on iOS");
        assert!(!f.applicable);
        assert!(!f.vulnerable);
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn empty_message_rejected() {
        let _ = Finding::new(CheckKind::DebuggableApp, false, "");
    }

    #[test]
    fn wire_verdict_field_names() {
        let f = Finding::new(CheckKind::TrustingDeviceTime, true, "Device time can be manipulated");
        let value = serde_json::to_value(f.to_wire()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert_eq!(obj["type"], "trustingDeviceTime");
        assert_eq!(obj["isVulnerable"], true);
        assert_eq!(obj["message"], "Device time can be manipulated");
    }

    #[test]
    fn finding_serializes_with_wire_kind() {
        let f = Finding::new(CheckKind::InsecureIpc, false, "IPC check requires manifest analysis");
        let value = serde_json::to_value(&f).unwrap();
        assert_eq!(value["type"], "insecureIPC");
        assert_eq!(value["isVulnerable"], false);
        assert_eq!(value["applicable"], true);
    }
}
