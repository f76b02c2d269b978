//! Best-effort local (desktop) host.
//!
//! [`LocalHost`] backs the probes a desktop process can genuinely answer
//! (filesystem, environment, binary lookup, the debug-build flag) and
//! reports everything device-specific as [`ProbeError::Unavailable`]. This
//! is the host the CLI runs against; it deliberately exercises the
//! engine's failure-absorption paths on the probes it cannot answer.

use std::path::PathBuf;

use devshield_types::{ProbeError, ProbeResult};

use crate::device::{
    AppInfoProbe, AuthProbe, BinaryProbe, BuildInfo, BuildInfoProbe, PackageProbe, ScreenProbe,
    SettingKey, SettingsProbe,
};
use crate::env::{EnvProbe, LocalEnvProbe};
use crate::fs::{FileProbe, LocalFileProbe};
use crate::{DeviceHost, DeviceOs};

/// Desktop host: real filesystem/environment/binary probes, everything
/// device-specific unavailable.
pub struct LocalHost {
    fs: LocalFileProbe,
    env: LocalEnvProbe,
    app: LocalAppInfo,
    build: LocalBuildInfo,
    device: UnavailableDeviceProbes,
    binaries: PathBinaryProbe,
}

impl LocalHost {
    pub fn new() -> Self {
        Self {
            fs: LocalFileProbe,
            env: LocalEnvProbe,
            app: LocalAppInfo,
            build: LocalBuildInfo,
            device: UnavailableDeviceProbes,
            binaries: PathBinaryProbe,
        }
    }
}

impl Default for LocalHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceHost for LocalHost {
    fn os(&self) -> DeviceOs {
        DeviceOs::Other
    }

    fn fs(&self) -> &dyn FileProbe {
        &self.fs
    }

    fn env(&self) -> &dyn EnvProbe {
        &self.env
    }

    fn app(&self) -> &dyn AppInfoProbe {
        &self.app
    }

    fn build(&self) -> &dyn BuildInfoProbe {
        &self.build
    }

    fn settings(&self) -> &dyn SettingsProbe {
        &self.device
    }

    fn auth(&self) -> &dyn AuthProbe {
        &self.device
    }

    fn screen(&self) -> &dyn ScreenProbe {
        &self.device
    }

    fn packages(&self) -> &dyn PackageProbe {
        &self.device
    }

    fn binaries(&self) -> Option<&dyn BinaryProbe> {
        Some(&self.binaries)
    }
}

/// App metadata for a plain desktop process.
struct LocalAppInfo;

impl AppInfoProbe for LocalAppInfo {
    fn is_debuggable(&self) -> ProbeResult<bool> {
        // A debug build is the desktop analogue of the debuggable flag.
        Ok(cfg!(debug_assertions))
    }

    fn allows_backup(&self) -> ProbeResult<bool> {
        Err(ProbeError::Unavailable("backup flag"))
    }

    fn files_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn data_dir(&self) -> Option<PathBuf> {
        None
    }

    fn external_files_dir(&self) -> Option<PathBuf> {
        None
    }

    fn preference_store_in_use(&self) -> ProbeResult<bool> {
        Err(ProbeError::Unavailable("preference store"))
    }
}

/// Desktop processes have no device build identity.
struct LocalBuildInfo;

impl BuildInfoProbe for LocalBuildInfo {
    fn info(&self) -> BuildInfo {
        BuildInfo::default()
    }
}

/// One zero-sized type answering `Unavailable` for every device-only probe.
struct UnavailableDeviceProbes;

impl SettingsProbe for UnavailableDeviceProbes {
    fn flag(&self, _key: SettingKey) -> ProbeResult<bool> {
        Err(ProbeError::Unavailable("system settings"))
    }
}

impl AuthProbe for UnavailableDeviceProbes {
    fn biometrics_available(&self) -> ProbeResult<bool> {
        Err(ProbeError::Unavailable("biometric capability"))
    }

    fn device_credential_set(&self) -> ProbeResult<bool> {
        Err(ProbeError::Unavailable("device credential"))
    }
}

impl ScreenProbe for UnavailableDeviceProbes {
    fn capture_restricted(&self) -> ProbeResult<bool> {
        Err(ProbeError::Unavailable("capture restriction"))
    }

    fn is_captured(&self) -> ProbeResult<bool> {
        Err(ProbeError::Unavailable("capture state"))
    }
}

impl PackageProbe for UnavailableDeviceProbes {
    fn is_installed(&self, _package: &str) -> ProbeResult<bool> {
        Err(ProbeError::Unavailable("package manager"))
    }
}

/// Binary lookup via the `which` crate.
struct PathBinaryProbe;

impl BinaryProbe for PathBinaryProbe {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}
