use std::sync::{Mutex, PoisonError};

use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

impl NotificationVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            NotificationVariant::Default => "default",
            NotificationVariant::Destructive => "destructive",
        }
    }
}

/// A transient, dismissible message (title + description).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: NotificationVariant,
}

impl Notification {
    pub const fn sent() -> Self {
        Self {
            title: "Заявка отправлена!",
            description: "Я свяжусь с вами в ближайшее время.",
            variant: NotificationVariant::Default,
        }
    }

    /// Shown for every failure cause; callers never see which one it was.
    pub const fn failed() -> Self {
        Self {
            title: "Ошибка отправки",
            description: "Попробуйте позже или свяжитесь напрямую.",
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Where notifications are surfaced. The page host decides how to show them.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the terminal. Used by the `submit` command.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        if notification.is_error() {
            warn!(title = notification.title, "notification");
            eprintln!("{}\n{}", notification.title, notification.description);
        } else {
            info!(title = notification.title, "notification");
            println!("{}\n{}", notification.title, notification.description);
        }
    }
}

/// Keeps the most recent notification so a page render can show it.
#[derive(Default)]
pub struct LatestNotifier {
    latest: Mutex<Option<Notification>>,
}

impl LatestNotifier {
    pub fn take(&self) -> Option<Notification> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Notifier for LatestNotifier {
    fn notify(&self, notification: Notification) {
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(notification);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Records every notification so tests can assert on them.
    #[derive(Default)]
    pub struct RecordingNotifier {
        seen: Mutex<Vec<Notification>>,
    }

    impl RecordingNotifier {
        pub fn all(&self) -> Vec<Notification> {
            self.seen.lock().unwrap().clone()
        }

        pub fn last(&self) -> Option<Notification> {
            self.seen.lock().unwrap().last().cloned()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.seen.lock().unwrap().push(notification);
        }
    }
}
