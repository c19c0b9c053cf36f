//! Notification de-duplication
//!
//! Toast plumbing lives in the UI layer; the engine only answers one
//! question for it: has an identical notification just been shown? Identical
//! means the same (key, kind) pair inside a sliding time window. The caller
//! supplies the clock so the gate stays deterministic under test.

use std::time::{Duration, Instant};

/// Severity of a notification, mirroring the UI's toast styles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
    Warning,
}

/// Sliding-window suppressor for duplicate notifications
#[derive(Debug)]
pub struct NotificationGate {
    window: Duration,
    seen: Vec<(String, NoticeKind, Instant)>,
}

impl NotificationGate {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            seen: Vec::new(),
        }
    }

    /// Decide whether a notification may be shown at `now`.
    ///
    /// Allowed notifications are recorded; suppressed ones do not extend the
    /// window, so a steady stream of duplicates still surfaces once per
    /// window rather than never.
    pub fn allow(&mut self, key: &str, kind: NoticeKind, now: Instant) -> bool {
        let window = self.window;
        self.seen
            .retain(|(_, _, shown)| now.duration_since(*shown) < window);

        let duplicate = self
            .seen
            .iter()
            .any(|(k, t, _)| k.as_str() == key && *t == kind);
        if duplicate {
            log::debug!("Suppressing duplicate {:?} notification: {}", kind, key);
            return false;
        }

        self.seen.push((key.to_string(), kind, now));
        true
    }
}
