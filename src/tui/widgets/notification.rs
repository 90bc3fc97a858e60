//! Toast notifications
//!
//! Reports the outcome of adds, edits, deletes and exports in the top-right
//! corner for a few seconds.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::error::CabinetError;

/// How long a notification stays on screen
const DISPLAY_TIME: Duration = Duration::from_secs(3);

/// Older toasts are dropped beyond this many
const MAX_QUEUED: usize = 4;

/// Whether the operation behind a toast went through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }

    /// Block title, e.g. ` + Done `
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => " + Done ",
            Self::Error => " x Failed ",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    pub created_at: Instant,
}

impl Notification {
    fn new(message: impl Into<String>, notification_type: NotificationType) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationType::Error)
    }

    /// Toast for an operation result: the success message or the error text
    pub fn from_outcome(outcome: Result<String, CabinetError>) -> Self {
        match outcome {
            Ok(message) => Self::success(message),
            Err(e) => Self::error(e.to_string()),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= DISPLAY_TIME
    }
}

/// Draws one notification as a bordered box
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let kind = self.notification.notification_type;
        let border = Style::default().fg(kind.color());

        Clear.render(area, buf);
        Paragraph::new(self.notification.message.as_str())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(kind.title())
                    .title_style(border.add_modifier(Modifier::BOLD)),
            )
            .render(area, buf);
    }
}

/// Pending notifications, oldest first
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification, dropping the oldest when full
    pub fn push(&mut self, notification: Notification) {
        if self.notifications.len() == MAX_QUEUED {
            self.notifications.pop_front();
        }
        self.notifications.push_back(notification);
    }

    /// Drop notifications that have been shown long enough
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// The notification to draw now
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.front()
    }

    /// Most recent notification
    pub fn latest(&self) -> Option<&Notification> {
        self.notifications.back()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_outcome() {
        let ok = Notification::from_outcome(Ok("Cabinet added".to_string()));
        assert_eq!(ok.notification_type, NotificationType::Success);
        assert_eq!(ok.message, "Cabinet added");
        assert!(!ok.is_expired());

        let err = Notification::from_outcome(Err(CabinetError::Export("disk full".into())));
        assert_eq!(err.notification_type, NotificationType::Error);
        assert_eq!(err.message, "Export error: disk full");
    }

    #[test]
    fn test_queue_order() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::success("First"));
        queue.push(Notification::error("Second"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().message, "First");
        assert_eq!(queue.latest().unwrap().message, "Second");
    }

    #[test]
    fn test_queue_drops_oldest_when_full() {
        let mut queue = NotificationQueue::new();
        for i in 0..MAX_QUEUED + 2 {
            queue.push(Notification::success(format!("toast {}", i)));
        }
        assert_eq!(queue.len(), MAX_QUEUED);
        assert_eq!(queue.current().unwrap().message, "toast 2");
    }

    #[test]
    fn test_expired_notifications_removed() {
        let mut queue = NotificationQueue::new();
        let mut old = Notification::success("old");
        old.created_at = Instant::now() - DISPLAY_TIME - Duration::from_millis(1);
        queue.push(old);
        queue.push(Notification::success("fresh"));

        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().message, "fresh");
    }
}
