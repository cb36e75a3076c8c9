use heapless::Vec;

use crate::types::{NetworkRecord, Security};

/// Upper bound on records kept from one scan pass.
pub const SCAN_MAX: usize = 16;

/// One-shot enumeration of currently visible access points.
///
/// A scan is a local radio operation with no network dependency, so a
/// failure here is treated as a hardware fault and propagates to the
/// orchestrator unrecovered. Filtering by authentication classification
/// is deliberately not this trait's job; the scanner stays a pure read.
pub trait AccessPointScan {
    type Error: core::fmt::Debug;

    async fn scan(&mut self) -> Result<Vec<NetworkRecord, SCAN_MAX>, Self::Error>;
}

/// Filters a scan pass down to open networks, preserving scan order.
pub fn open_candidates(visible: &[NetworkRecord]) -> Vec<NetworkRecord, SCAN_MAX> {
    let mut open = Vec::new();
    for record in visible {
        if record.security == Security::Open {
            let _ = open.push(record.clone());
        }
    }
    open
}
