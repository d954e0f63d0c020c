//! Notifier port: surfaces transient messages to the user.

use emsdash_domain::notification::Notification;

/// Sink for user-facing notifications (toasts, snackbars, log lines, …).
pub trait Notifier {
    fn notify(&self, notification: Notification);
}
