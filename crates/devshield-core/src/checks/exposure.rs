//! App-surface exposure checks.
//!
//! Almost everything here needs manifest or runtime analysis the engine
//! cannot perform from inside the process, so most detectors are stubs
//! with a fixed non-vulnerable verdict and a message naming the required
//! instrumentation. The Android-specific surfaces (intents, broadcast
//! receivers) report not applicable on iOS.

use devshield_platform::{DeviceHost, DeviceOs};
use devshield_types::{CheckKind, Finding};

use crate::detector::{Detector, StubDetector};

/// Exported services/providers need manifest analysis; the iOS sandbox
/// restricts IPC at the system level.
pub struct IpcDetector;

impl Detector for IpcDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::InsecureIpc
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        let message = if host.os() == DeviceOs::Ios {
            "iOS sandbox restricts IPC"
        } else {
            "IPC check requires manifest analysis"
        };
        Finding::new(self.kind(), false, message)
    }
}

/// Implicit-intent interception is an Android concept.
pub struct IntentHijackingDetector;

impl Detector for IntentHijackingDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::IntentHijacking
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        if host.os() == DeviceOs::Ios {
            return Finding::not_applicable(self.kind(), "Not applicable on iOS");
        }
        Finding::new(
            self.kind(),
            false,
            "Intent hijacking check requires manifest analysis",
        )
    }
}

/// Exported broadcast receivers are an Android concept.
pub struct BroadcastReceiverDetector;

impl Detector for BroadcastReceiverDetector {
    fn kind(&self) -> CheckKind {
        CheckKind::BroadcastReceiverExposure
    }

    fn evaluate(&self, host: &dyn DeviceHost) -> Finding {
        if host.os() == DeviceOs::Ios {
            return Finding::not_applicable(self.kind(), "Not applicable on iOS");
        }
        Finding::new(
            self.kind(),
            false,
            "Broadcast receiver check requires manifest analysis",
        )
    }
}

pub fn deep_link_stub() -> StubDetector {
    StubDetector::new(
        CheckKind::DeepLinkHijacking,
        false,
        "Deep link validation requires app-specific implementation",
    )
}

pub fn webview_debugging_stub() -> StubDetector {
    StubDetector::new(
        CheckKind::WebViewDebugging,
        false,
        "WebView debugging check requires runtime inspection",
    )
}

pub fn webview_javascript_stub() -> StubDetector {
    StubDetector::new(
        CheckKind::WebViewJavaScriptAbuse,
        false,
        "WebView JavaScript check requires runtime inspection",
    )
}

pub fn runtime_permissions_stub() -> StubDetector {
    StubDetector::new(
        CheckKind::RuntimePermissionMissing,
        false,
        "Permission validation requires app-specific checks",
    )
}

pub fn autofill_stub() -> StubDetector {
    StubDetector::new(
        CheckKind::InsecureAutofill,
        false,
        "Autofill security requires app-specific implementation",
    )
}

pub fn sensor_abuse_stub() -> StubDetector {
    StubDetector::new(
        CheckKind::SensorAbuse,
        false,
        "Sensor abuse check requires permission analysis",
    )
}

pub fn side_channel_stub() -> StubDetector {
    StubDetector::new(
        CheckKind::SideChannelAttacks,
        false,
        "Side-channel attack prevention requires specific implementation",
    )
}
