//! Hardware-free core of the open-network survey firmware.
//!
//! Everything here runs against capability traits (`AccessPointScan`,
//! `StationLink`, `Reachability`, plus `embedded-hal` pin/delay traits),
//! so the whole discovery state machine is unit-testable on the host.
//! The firmware crate supplies the esp-radio and embassy-net adapters.

#![no_std]

pub mod config;
pub mod echo;
pub mod indicator;
pub mod link;
pub mod probe;
pub mod scan;
pub mod survey;
pub mod types;

pub use config::SurveyConfig;
pub use indicator::Indicator;
pub use link::{ConnectionManager, StationLink};
pub use probe::Reachability;
pub use scan::AccessPointScan;
pub use survey::{Survey, SurveyOutcome};
pub use types::{ConnectionOutcome, ConnectionState, NetworkRecord, Security};
