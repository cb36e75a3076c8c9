//! Reachability verification seam.

use log::debug;

use crate::types::ProbeFailure;

/// Active end-to-end connectivity check against a well-known host.
///
/// Implementations issue a small burst of echo probes and answer true
/// iff at least one reply came back. Every transport-level failure (name
/// resolution, no route, socket fault, no address lease) is downgraded
/// to `false`: a dead uplink behind an open network is expected
/// behavior, not a system error.
pub trait Reachability {
    async fn probe(&mut self, host: &str) -> bool;
}

/// Collapses a probe attempt into the survey's boolean verdict. A
/// transport failure counts as unreachable, never as an error.
pub fn verdict(outcome: Result<bool, ProbeFailure>) -> bool {
    match outcome {
        Ok(reachable) => reachable,
        Err(failure) => {
            debug!("probe: {} downgraded to unreachable", failure.as_str());
            false
        }
    }
}
