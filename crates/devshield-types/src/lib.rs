//! # devshield-types
//!
//! Core type definitions for the devshield security-posture engine.
//!
//! This crate is the foundation of the dependency graph -- all other
//! devshield crates depend on it. It contains:
//!
//! - **[`check`]** -- [`CheckKind`], the closed catalog of check categories
//!   with their request and wire identifiers
//! - **[`finding`]** -- [`Finding`] and [`WireVerdict`], the normalized
//!   outputs of one check evaluation
//! - **[`error`]** -- [`ProbeError`] and [`EngineError`] error types

pub mod check;
pub mod error;
pub mod finding;

pub use check::CheckKind;
pub use error::{EngineError, ProbeError, ProbeResult};
pub use finding::{Finding, WireVerdict};
