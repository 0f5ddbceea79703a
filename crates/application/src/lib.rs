//! Application services and ports.

#![forbid(unsafe_code)]

mod access_control_service;
mod clock;

pub use access_control_service::{AccessControlService, RoleHistoryEntry, SessionSummary};
pub use clock::{Clock, FixedClock, SystemClock};
