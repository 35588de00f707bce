// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of
//! notifications. It limits the number of visible toasts and expires
//! them on ticks from a timed subscription.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it is
    /// displayed immediately; otherwise it queues and is shown when
    /// space becomes available.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Processes a notification message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Expires visible notifications whose auto-dismiss window passed
    /// and promotes queued ones into the freed slots.
    pub fn tick(&mut self) {
        self.visible.retain(|notification| !notification.expired());
        self.promote_from_queue();
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_front(notification),
                None => break,
            }
        }
    }

    /// Currently visible notifications, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_shows_up_to_max_visible() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE + 2 {
            manager.push(Notification::info("k"));
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(!manager.is_empty());
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE + 1 {
            manager.push(Notification::info("k"));
        }
        let first = manager.visible().next().map(|n| n.id()).unwrap();
        assert!(manager.dismiss(first));
        // The queued notification takes the freed slot.
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        manager.push(Notification::info("k"));
        assert!(!manager.dismiss(NotificationId::new()));
    }

    #[test]
    fn tick_keeps_unexpired_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::error("k"));
        manager.push(Notification::success("k"));
        manager.tick();
        // Neither has had time to expire; errors never do.
        assert_eq!(manager.visible().count(), 2);
    }

    #[test]
    fn empty_manager_reports_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.visible().count(), 0);
    }
}
