//! The detector implementations, grouped by concern.
//!
//! - [`device`] -- device integrity and identity (root/jailbreak,
//!   debuggable, USB debugging, emulator, malware, device time)
//! - [`storage`] -- data-at-rest exposure (local storage, plaintext files,
//!   keystore, file permissions, external storage, backup)
//! - [`capture`] -- authentication and screen/output capture (biometrics,
//!   screen lock, screenshots, recording, clipboard, overlay, recents,
//!   background snapshots)
//! - [`exposure`] -- app-surface exposure (IPC, intents, broadcast
//!   receivers, deep links, WebView, permissions, autofill, sensors,
//!   side channels)

pub mod capture;
pub mod device;
pub mod exposure;
pub mod storage;

use devshield_types::CheckKind;

use crate::catalog::DetectorCatalog;
use crate::detector::Detector;

fn build(kind: CheckKind) -> Box<dyn Detector> {
    match kind {
        CheckKind::RootedOrJailbroken => Box::new(device::RootJailbreakDetector),
        CheckKind::DebuggableApp => Box::new(device::DebuggableDetector),
        CheckKind::UsbDebugging => Box::new(device::UsbDebuggingDetector),
        CheckKind::EmulatorDetected => Box::new(device::EmulatorDetector),
        CheckKind::MalwareExposure => Box::new(device::MalwareDetector),
        CheckKind::InsecureLocalStorage => Box::new(storage::LocalStorageDetector),
        CheckKind::PlaintextData => Box::new(storage::PlaintextDataDetector),
        CheckKind::ImproperKeystore => Box::new(storage::KeystoreDetector),
        CheckKind::InsecureFilePermissions => Box::new(storage::FilePermissionsDetector),
        CheckKind::ExternalStorageExposure => Box::new(storage::ExternalStorageDetector),
        CheckKind::BackupEnabled => Box::new(storage::BackupDetector),
        CheckKind::WeakBiometricHandling => Box::new(capture::BiometricHandlingDetector),
        CheckKind::BiometricBypass => Box::new(capture::biometric_bypass_stub()),
        CheckKind::ScreenLockNotEnforced => Box::new(capture::ScreenLockDetector),
        CheckKind::ScreenshotNotRestricted => Box::new(capture::ScreenshotDetector),
        CheckKind::ScreenRecordingNotRestricted => Box::new(capture::ScreenRecordingDetector),
        CheckKind::ClipboardLeakage => Box::new(capture::clipboard_stub()),
        CheckKind::OverlayAttack => Box::new(capture::OverlayDetector),
        CheckKind::BackgroundDataExposure => Box::new(capture::background_data_stub()),
        CheckKind::RecentAppsExposure => Box::new(capture::RecentAppsDetector),
        CheckKind::InsecureIpc => Box::new(exposure::IpcDetector),
        CheckKind::IntentHijacking => Box::new(exposure::IntentHijackingDetector),
        CheckKind::BroadcastReceiverExposure => Box::new(exposure::BroadcastReceiverDetector),
        CheckKind::DeepLinkHijacking => Box::new(exposure::deep_link_stub()),
        CheckKind::WebViewDebugging => Box::new(exposure::webview_debugging_stub()),
        CheckKind::WebViewJavaScriptAbuse => Box::new(exposure::webview_javascript_stub()),
        CheckKind::RuntimePermissionMissing => Box::new(exposure::runtime_permissions_stub()),
        CheckKind::InsecureAutofill => Box::new(exposure::autofill_stub()),
        CheckKind::SensorAbuse => Box::new(exposure::sensor_abuse_stub()),
        CheckKind::TrustingDeviceTime => Box::new(device::DeviceTimeDetector),
        CheckKind::SideChannelAttacks => Box::new(exposure::side_channel_stub()),
    }
}

/// Register the full standard catalog, one detector per kind, in
/// [`CheckKind::ALL`] order.
pub fn register_all(catalog: &mut DetectorCatalog) {
    for kind in CheckKind::ALL {
        catalog.register(build(kind));
    }
}

/// Register the standard catalog minus one kind. Test hook for swapping a
/// single detector (e.g. a deliberately panicking one) into a full catalog.
pub fn register_all_except(catalog: &mut DetectorCatalog, skip: CheckKind) {
    for kind in CheckKind::ALL {
        if kind != skip {
            catalog.register(build(kind));
        }
    }
}
