//! Error types for the devshield engine.
//!
//! Two error surfaces exist by design: [`ProbeError`] for signal reads that
//! fail inside a detector (always absorbed into a finding, never propagated
//! past the detector) and [`EngineError`] for the one failure the engine
//! does surface, an unrecognized check identifier.

use thiserror::Error;

/// A signal probe could not be read.
///
/// Detectors absorb these into their documented safe-default verdict; a
/// probe failure must never abort a batch or reach the bridge layer.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProbeError {
    /// The probe has no backing capability on this host.
    #[error("probe unavailable: {0}")]
    Unavailable(&'static str),

    /// The host denied access to the underlying signal.
    #[error("permission denied reading {0}")]
    PermissionDenied(String),

    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience alias for probe reads.
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

/// Errors surfaced by the diagnostic engine.
///
/// `UnknownCheck` is deliberately distinct from a not-applicable finding:
/// it means the identifier is not a recognized check at all, and the bridge
/// maps it to a not-implemented response rather than an error payload.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    /// The request identifier is not in the catalog.
    #[error("unknown check: {0}")]
    UnknownCheck(String),
}
