//! # devshield-core
//!
//! The decision core of devshield: the detector catalog and the
//! diagnostic engine that evaluates it.
//!
//! - **[`detector`]** -- the [`Detector`] trait and signal-combination
//!   helpers
//! - **[`catalog`]** -- [`DetectorCatalog`], the ordered method-id registry
//! - **[`engine`]** -- [`DiagnosticEngine`], panic-isolated dispatch over
//!   the catalog
//! - **[`report`]** -- [`PostureReport`], the aggregate scan result
//! - **[`checks`]** -- the detector implementations, one per
//!   [`CheckKind`](devshield_types::CheckKind)
//!
//! The engine never decides platform facts itself; every signal comes from
//! a [`DeviceHost`](devshield_platform::DeviceHost) injected at
//! construction, which is what makes the whole catalog testable against
//! scripted hosts.

pub mod catalog;
pub mod checks;
pub mod detector;
pub mod engine;
pub mod report;

pub use catalog::DetectorCatalog;
pub use detector::Detector;
pub use engine::DiagnosticEngine;
pub use report::PostureReport;
