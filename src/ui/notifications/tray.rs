// SPDX-License-Identifier: MPL-2.0
//! Queue of toasts waiting for, or holding, a slot on screen.

use super::notice::{Notice, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Toasts on screen at once.
const SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastId(u64);

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(ToastId),
}

#[derive(Debug, Clone)]
struct Shown {
    id: ToastId,
    notice: Notice,
    since: Instant,
}

impl Shown {
    fn expired(&self, now: Instant) -> bool {
        self.notice
            .severity()
            .lifetime()
            .is_some_and(|lifetime| now.saturating_duration_since(self.since) >= lifetime)
    }
}

/// Toasts currently shown, newest last, plus the backlog.
///
/// A toast's lifetime starts when it gets a slot, not when it is raised.
#[derive(Debug, Default)]
pub struct Tray {
    shown: VecDeque<Shown>,
    waiting: VecDeque<(ToastId, Notice)>,
    next_id: u64,
}

impl Tray {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notice: Notice, now: Instant) -> ToastId {
        match notice.severity() {
            Severity::Success => tracing::debug!(key = notice.message_key(), "toast"),
            Severity::Warning => tracing::warn!(key = notice.message_key(), "toast"),
            Severity::Error => tracing::error!(key = notice.message_key(), "toast"),
        }

        self.next_id += 1;
        let id = ToastId(self.next_id);
        self.waiting.push_back((id, notice));
        self.fill_slots(now);
        id
    }

    pub fn handle_message(&mut self, message: Message, now: Instant) {
        match message {
            Message::Dismiss(id) => self.dismiss(id, now),
        }
    }

    fn dismiss(&mut self, id: ToastId, now: Instant) {
        self.shown.retain(|toast| toast.id != id);
        self.waiting.retain(|(waiting, _)| *waiting != id);
        self.fill_slots(now);
    }

    /// Drops expired toasts and gives their slots to waiting ones.
    pub fn tick(&mut self, now: Instant) {
        self.shown.retain(|toast| !toast.expired(now));
        self.fill_slots(now);
    }

    /// Drops capture load failures, shown or waiting.
    pub fn clear_load_failures(&mut self, now: Instant) {
        self.shown.retain(|toast| !toast.notice.is_load_failure());
        self.waiting.retain(|(_, notice)| !notice.is_load_failure());
        self.fill_slots(now);
    }

    fn fill_slots(&mut self, now: Instant) {
        while self.shown.len() < SLOTS {
            let Some((id, notice)) = self.waiting.pop_front() else {
                break;
            };
            self.shown.push_back(Shown {
                id,
                notice,
                since: now,
            });
        }
    }

    /// Toasts on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = (ToastId, &Notice)> {
        self.shown.iter().map(|toast| (toast.id, &toast.notice))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty() && self.waiting.is_empty()
    }
}
