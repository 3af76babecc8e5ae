//! Derived notifications.
//!
//! Notifications are recomputed from current records every time they are
//! requested; nothing is stored except per-viewer read and dismissed state,
//! which `NotificationInbox` keys by the notification's derived ID.

pub mod inbox;
pub mod service;
pub mod types;

pub use inbox::NotificationInbox;
pub use service::NotificationService;
pub use types::{Notification, NotificationKind, ViewerContext};
