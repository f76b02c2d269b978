//! Signal probe abstraction layer for devshield.
//!
//! Provides traits for every low-level environment read the detectors
//! consume (file existence, system settings, app metadata, biometric and
//! screen-capture state) so the decision logic in `devshield-core` stays
//! platform-agnostic.
//!
//! # Architecture
//!
//! The [`DeviceHost`] trait bundles all probe capabilities via accessor
//! methods. Each probe family has its own trait ([`fs::FileProbe`],
//! [`env::EnvProbe`], [`device::AppInfoProbe`], ...) so detectors depend
//! only on the facts they actually read and tests can fake one family at a
//! time.
//!
//! [`device::BinaryProbe`] is intentionally exposed as an `Option` from
//! [`DeviceHost::binaries`] because binary lookup is unavailable on
//! sandboxed hosts.
//!
//! Two implementations ship with the crate: [`LocalHost`] (best-effort
//! desktop host used by the CLI) and [`StaticHost`] (fully scripted
//! in-memory host for deterministic tests). A real mobile embedding
//! supplies its own implementation backed by OS APIs.

pub mod device;
pub mod env;
pub mod fs;
pub mod local;
pub mod static_host;

pub use local::LocalHost;
pub use static_host::StaticHost;

use std::fmt;

/// Operating system family of the host device.
///
/// Drives per-platform signal selection (which root/jailbreak artifact
/// paths to test) and applicability (USB debugging means nothing on iOS).
/// `Other` covers desktop and test hosts; detectors treat it as "run every
/// signal that can be run".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceOs {
    Android,
    Ios,
    Other,
}

impl fmt::Display for DeviceOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Android => write!(f, "android"),
            Self::Ios => write!(f, "ios"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Bundle of all signal probe capabilities.
///
/// Implementors provide concrete probes for one host platform. The engine
/// receives a `DeviceHost` once at construction and never mutates it;
/// every probe method is a read of current OS state.
pub trait DeviceHost: Send + Sync {
    /// Which OS family this host reports as.
    fn os(&self) -> DeviceOs;

    /// Filesystem facts: existence, listings, permission bits, writability.
    fn fs(&self) -> &dyn fs::FileProbe;

    /// Process environment variables.
    fn env(&self) -> &dyn env::EnvProbe;

    /// Application metadata (debuggable flag, backup flag, data dirs).
    fn app(&self) -> &dyn device::AppInfoProbe;

    /// Device build/identity fields (fingerprint, model, manufacturer).
    fn build(&self) -> &dyn device::BuildInfoProbe;

    /// Boolean system settings (ADB enabled, automatic time).
    fn settings(&self) -> &dyn device::SettingsProbe;

    /// Authentication capabilities (biometrics, device credential).
    fn auth(&self) -> &dyn device::AuthProbe;

    /// Screen-capture state (FLAG_SECURE, active recording).
    fn screen(&self) -> &dyn device::ScreenProbe;

    /// Installed-package queries.
    fn packages(&self) -> &dyn device::PackageProbe;

    /// Binary lookup on the search path.
    ///
    /// Returns `None` on hosts where binary discovery is unavailable
    /// (sandboxed app processes); detectors treat that as the signal
    /// being absent.
    fn binaries(&self) -> Option<&dyn device::BinaryProbe>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_os_display() {
        assert_eq!(DeviceOs::Android.to_string(), "android");
        assert_eq!(DeviceOs::Ios.to_string(), "ios");
        assert_eq!(DeviceOs::Other.to_string(), "other");
    }

    #[test]
    fn local_host_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LocalHost>();
        assert_send_sync::<StaticHost>();
    }
}
