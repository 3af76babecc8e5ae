//! Per-viewer read and dismissed state.

use std::collections::BTreeSet;

use gymdesk_shared::types::NotificationId;
use serde::{Deserialize, Serialize};

use super::types::Notification;

/// Read and dismissed notification IDs for one viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationInbox {
    read: BTreeSet<NotificationId>,
    dismissed: BTreeSet<NotificationId>,
}

impl NotificationInbox {
    /// Creates an empty inbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies this inbox to freshly computed notifications: dismissed ones
    /// are dropped and read ones are flagged.
    #[must_use]
    pub fn apply(&self, notifications: Vec<Notification>) -> Vec<Notification> {
        notifications
            .into_iter()
            .filter(|n| !self.dismissed.contains(&n.id))
            .map(|n| Notification {
                read: self.read.contains(&n.id),
                ..n
            })
            .collect()
    }

    /// Marks one notification as read.
    pub fn mark_read(&mut self, id: NotificationId) {
        self.read.insert(id);
    }

    /// Marks every given notification as read.
    pub fn mark_all_read(&mut self, notifications: &[Notification]) {
        self.read.extend(notifications.iter().map(|n| n.id));
    }

    /// Dismisses the given notifications. They stay hidden for as long as
    /// recomputation keeps producing the same IDs.
    pub fn dismiss(&mut self, ids: &[NotificationId]) {
        self.dismissed.extend(ids.iter().copied());
    }

    /// Number of visible, unread notifications.
    #[must_use]
    pub fn unread_count(&self, notifications: &[Notification]) -> usize {
        notifications
            .iter()
            .filter(|n| !self.dismissed.contains(&n.id) && !self.read.contains(&n.id))
            .count()
    }
}
