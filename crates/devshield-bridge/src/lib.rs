//! # devshield-bridge
//!
//! The host-boundary adapter: a method identifier comes in from the host
//! runtime's channel, the matching check runs, and the three-field wire
//! record goes back. Unrecognized identifiers map to a distinct
//! not-implemented response, mirroring host method-channel conventions --
//! never an error payload.
//!
//! ```
//! use std::sync::Arc;
//! use devshield_bridge::{BridgeAdapter, BridgeResponse};
//! use devshield_core::DiagnosticEngine;
//! use devshield_platform::StaticHost;
//!
//! let engine = DiagnosticEngine::standard(Arc::new(StaticHost::android()));
//! let bridge = BridgeAdapter::new(engine);
//! match bridge.handle("checkDebuggable") {
//!     BridgeResponse::Verdict(v) => assert_eq!(v.check_type, "debuggableApp"),
//!     BridgeResponse::NotImplemented => unreachable!(),
//! }
//! ```

use tracing::debug;

use devshield_core::DiagnosticEngine;
use devshield_types::WireVerdict;

/// Outcome of one bridge request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeResponse {
    /// The check ran; here is its wire record.
    Verdict(WireVerdict),
    /// The method identifier is not a recognized check.
    NotImplemented,
}

/// Maps inbound method identifiers to engine invocations.
pub struct BridgeAdapter {
    engine: DiagnosticEngine,
}

impl BridgeAdapter {
    pub fn new(engine: DiagnosticEngine) -> Self {
        Self { engine }
    }

    /// The engine behind this adapter.
    pub fn engine(&self) -> &DiagnosticEngine {
        &self.engine
    }

    /// Handle one request. Never fails: a known identifier always yields a
    /// verdict, anything else yields `NotImplemented`.
    pub fn handle(&self, method: &str) -> BridgeResponse {
        match self.engine.invoke(method) {
            Ok(finding) => {
                debug!(check = method, vulnerable = finding.vulnerable, "bridge verdict");
                BridgeResponse::Verdict(finding.to_wire())
            }
            Err(_) => {
                debug!(check = method, "bridge method not implemented");
                BridgeResponse::NotImplemented
            }
        }
    }

    /// Handle one request and serialize the verdict.
    ///
    /// `None` stands for the host channel's native not-implemented signal.
    pub fn handle_json(&self, method: &str) -> Option<serde_json::Value> {
        match self.handle(method) {
            BridgeResponse::Verdict(verdict) => {
                // WireVerdict serialization cannot fail: three plain fields.
                Some(serde_json::to_value(verdict).unwrap_or_default())
            }
            BridgeResponse::NotImplemented => None,
        }
    }
}
