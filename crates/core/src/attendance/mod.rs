//! Attendance (presence) logging and summaries.

pub mod service;
pub mod types;

pub use service::AttendanceService;
pub use types::{AttendanceSummary, NewPresence, Presence, PresenceStatus};
