//! The closed catalog of security check categories.
//!
//! [`CheckKind`] enumerates every check the engine knows about, exactly one
//! variant per detector. Each kind carries two stable string forms: the
//! camelCase request identifier used by the host bridge ([`method_id`]) and
//! the `type` field of the wire verdict ([`wire_name`]). Both are fixed at
//! build time; adding a check means adding a variant here and a detector in
//! the catalog, nothing else.
//!
//! [`method_id`]: CheckKind::method_id
//! [`wire_name`]: CheckKind::wire_name

use serde::{Deserialize, Serialize};
use std::fmt;

/// A security check category.
///
/// The set is closed: every detector maps to exactly one variant and the
/// bridge recognizes exactly these identifiers. Serializes as the wire
/// `type` name (e.g. `RootedOrJailbroken` -> `"rootedJailbroken"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckKind {
    #[serde(rename = "rootedJailbroken")]
    RootedOrJailbroken,
    #[serde(rename = "debuggableApp")]
    DebuggableApp,
    #[serde(rename = "usbDebugging")]
    UsbDebugging,
    #[serde(rename = "emulatorDetection")]
    EmulatorDetected,
    #[serde(rename = "malwareExposure")]
    MalwareExposure,
    #[serde(rename = "insecureLocalStorage")]
    InsecureLocalStorage,
    #[serde(rename = "plaintextData")]
    PlaintextData,
    #[serde(rename = "improperKeychainKeystore")]
    ImproperKeystore,
    #[serde(rename = "insecureFilePermissions")]
    InsecureFilePermissions,
    #[serde(rename = "externalStorageSensitiveData")]
    ExternalStorageExposure,
    #[serde(rename = "backupEnabled")]
    BackupEnabled,
    #[serde(rename = "weakBiometricHandling")]
    WeakBiometricHandling,
    #[serde(rename = "biometricBypass")]
    BiometricBypass,
    #[serde(rename = "screenLockNotEnforced")]
    ScreenLockNotEnforced,
    #[serde(rename = "screenshotNotRestricted")]
    ScreenshotNotRestricted,
    #[serde(rename = "screenRecordingNotRestricted")]
    ScreenRecordingNotRestricted,
    #[serde(rename = "clipboardLeakage")]
    ClipboardLeakage,
    #[serde(rename = "overlayAttack")]
    OverlayAttack,
    #[serde(rename = "backgroundDataExposure")]
    BackgroundDataExposure,
    #[serde(rename = "recentAppsExposure")]
    RecentAppsExposure,
    #[serde(rename = "insecureIPC")]
    InsecureIpc,
    #[serde(rename = "intentHijacking")]
    IntentHijacking,
    #[serde(rename = "broadcastReceiverExposure")]
    BroadcastReceiverExposure,
    #[serde(rename = "deepLinkHijacking")]
    DeepLinkHijacking,
    #[serde(rename = "webViewDebugging")]
    WebViewDebugging,
    #[serde(rename = "webViewJavaScriptAbuse")]
    WebViewJavaScriptAbuse,
    #[serde(rename = "runtimePermissionMissing")]
    RuntimePermissionMissing,
    #[serde(rename = "insecureAutofill")]
    InsecureAutofill,
    #[serde(rename = "sensorAbuse")]
    SensorAbuse,
    #[serde(rename = "trustingDeviceTime")]
    TrustingDeviceTime,
    #[serde(rename = "sideChannelAttacks")]
    SideChannelAttacks,
}

impl CheckKind {
    /// Every check kind, in catalog registration order.
    ///
    /// This order is the order `invokeAll` reports in and the order the
    /// standard catalog registers in.
    pub const ALL: [CheckKind; 31] = [
        CheckKind::RootedOrJailbroken,
        CheckKind::DebuggableApp,
        CheckKind::UsbDebugging,
        CheckKind::EmulatorDetected,
        CheckKind::MalwareExposure,
        CheckKind::InsecureLocalStorage,
        CheckKind::PlaintextData,
        CheckKind::ImproperKeystore,
        CheckKind::InsecureFilePermissions,
        CheckKind::ExternalStorageExposure,
        CheckKind::BackupEnabled,
        CheckKind::WeakBiometricHandling,
        CheckKind::BiometricBypass,
        CheckKind::ScreenLockNotEnforced,
        CheckKind::ScreenshotNotRestricted,
        CheckKind::ScreenRecordingNotRestricted,
        CheckKind::ClipboardLeakage,
        CheckKind::OverlayAttack,
        CheckKind::BackgroundDataExposure,
        CheckKind::RecentAppsExposure,
        CheckKind::InsecureIpc,
        CheckKind::IntentHijacking,
        CheckKind::BroadcastReceiverExposure,
        CheckKind::DeepLinkHijacking,
        CheckKind::WebViewDebugging,
        CheckKind::WebViewJavaScriptAbuse,
        CheckKind::RuntimePermissionMissing,
        CheckKind::InsecureAutofill,
        CheckKind::SensorAbuse,
        CheckKind::TrustingDeviceTime,
        CheckKind::SideChannelAttacks,
    ];

    /// The camelCase request identifier the bridge dispatches on.
    pub fn method_id(&self) -> &'static str {
        match self {
            Self::RootedOrJailbroken => "checkRootedJailbroken",
            Self::DebuggableApp => "checkDebuggable",
            Self::UsbDebugging => "checkUsbDebugging",
            Self::EmulatorDetected => "checkEmulator",
            Self::MalwareExposure => "checkMalware",
            Self::InsecureLocalStorage => "checkLocalStorage",
            Self::PlaintextData => "checkPlaintextData",
            Self::ImproperKeystore => "checkKeychainKeystore",
            Self::InsecureFilePermissions => "checkFilePermissions",
            Self::ExternalStorageExposure => "checkExternalStorage",
            Self::BackupEnabled => "checkBackupEnabled",
            Self::WeakBiometricHandling => "checkBiometricHandling",
            Self::BiometricBypass => "checkBiometricBypass",
            Self::ScreenLockNotEnforced => "checkScreenLock",
            Self::ScreenshotNotRestricted => "checkScreenshotRestriction",
            Self::ScreenRecordingNotRestricted => "checkScreenRecording",
            Self::ClipboardLeakage => "checkClipboard",
            Self::OverlayAttack => "checkOverlayAttack",
            Self::BackgroundDataExposure => "checkBackgroundDataExposure",
            Self::RecentAppsExposure => "checkRecentApps",
            Self::InsecureIpc => "checkIPC",
            Self::IntentHijacking => "checkIntentHijacking",
            Self::BroadcastReceiverExposure => "checkBroadcastReceiver",
            Self::DeepLinkHijacking => "checkDeepLink",
            Self::WebViewDebugging => "checkWebViewDebugging",
            Self::WebViewJavaScriptAbuse => "checkWebViewJavaScript",
            Self::RuntimePermissionMissing => "checkRuntimePermissions",
            Self::InsecureAutofill => "checkAutofill",
            Self::SensorAbuse => "checkSensorAbuse",
            Self::TrustingDeviceTime => "checkDeviceTime",
            Self::SideChannelAttacks => "checkSideChannel",
        }
    }

    /// The `type` string carried in the wire verdict.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::RootedOrJailbroken => "rootedJailbroken",
            Self::DebuggableApp => "debuggableApp",
            Self::UsbDebugging => "usbDebugging",
            Self::EmulatorDetected => "emulatorDetection",
            Self::MalwareExposure => "malwareExposure",
            Self::InsecureLocalStorage => "insecureLocalStorage",
            Self::PlaintextData => "plaintextData",
            Self::ImproperKeystore => "improperKeychainKeystore",
            Self::InsecureFilePermissions => "insecureFilePermissions",
            Self::ExternalStorageExposure => "externalStorageSensitiveData",
            Self::BackupEnabled => "backupEnabled",
            Self::WeakBiometricHandling => "weakBiometricHandling",
            Self::BiometricBypass => "biometricBypass",
            Self::ScreenLockNotEnforced => "screenLockNotEnforced",
            Self::ScreenshotNotRestricted => "screenshotNotRestricted",
            Self::ScreenRecordingNotRestricted => "screenRecordingNotRestricted",
            Self::ClipboardLeakage => "clipboardLeakage",
            Self::OverlayAttack => "overlayAttack",
            Self::BackgroundDataExposure => "backgroundDataExposure",
            Self::RecentAppsExposure => "recentAppsExposure",
            Self::InsecureIpc => "insecureIPC",
            Self::IntentHijacking => "intentHijacking",
            Self::BroadcastReceiverExposure => "broadcastReceiverExposure",
            Self::DeepLinkHijacking => "deepLinkHijacking",
            Self::WebViewDebugging => "webViewDebugging",
            Self::WebViewJavaScriptAbuse => "webViewJavaScriptAbuse",
            Self::RuntimePermissionMissing => "runtimePermissionMissing",
            Self::InsecureAutofill => "insecureAutofill",
            Self::SensorAbuse => "sensorAbuse",
            Self::TrustingDeviceTime => "trustingDeviceTime",
            Self::SideChannelAttacks => "sideChannelAttacks",
        }
    }

    /// Resolve a request identifier back to its kind.
    ///
    /// Returns `None` for anything outside the fixed identifier set; the
    /// caller decides whether that is an `UnknownCheck` error or a
    /// not-implemented bridge response.
    pub fn from_method_id(method: &str) -> Option<CheckKind> {
        Self::ALL.iter().copied().find(|k| k.method_id() == method)
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_covers_31_kinds() {
        assert_eq!(CheckKind::ALL.len(), 31);
        let unique: HashSet<_> = CheckKind::ALL.iter().collect();
        assert_eq!(unique.len(), 31, "duplicate kind in ALL");
    }

    #[test]
    fn method_ids_are_unique() {
        let ids: HashSet<_> = CheckKind::ALL.iter().map(|k| k.method_id()).collect();
        assert_eq!(ids.len(), 31);
    }

    #[test]
    fn wire_names_are_unique() {
        let names: HashSet<_> = CheckKind::ALL.iter().map(|k| k.wire_name()).collect();
        assert_eq!(names.len(), 31);
    }

    #[test]
    fn from_method_id_round_trips() {
        for kind in CheckKind::ALL {
            assert_eq!(CheckKind::from_method_id(kind.method_id()), Some(kind));
        }
    }

    #[test]
    fn from_method_id_rejects_unknown() {
        assert_eq!(CheckKind::from_method_id("checkQuantumTunneling"), None);
        assert_eq!(CheckKind::from_method_id(""), None);
        // Wire names are not request identifiers.
        assert_eq!(CheckKind::from_method_id("rootedJailbroken"), None);
    }

    #[test]
    fn serializes_as_wire_name() {
        let json = serde_json::to_string(&CheckKind::RootedOrJailbroken).unwrap();
        assert_eq!(json, "\"rootedJailbroken\"");
        let json = serde_json::to_string(&CheckKind::InsecureIpc).unwrap();
        assert_eq!(json, "\"insecureIPC\"");
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(
            CheckKind::TrustingDeviceTime.to_string(),
            "trustingDeviceTime"
        );
    }
}
