// SPDX-License-Identifier: MPL-2.0
//! Per-`show` browsing state: which capture is current and what has loaded.

use crate::capture::{CaptureData, CaptureId, Collection};
use crate::error::Error;
use iced::widget::scrollable::RelativeOffset;

/// Identifies one capture lookup. Tags increase monotonically per preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTag(u64);

impl RequestTag {
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Enablement of the previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// Result of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved,
    AtBoundary,
}

#[derive(Debug, Clone)]
pub struct Session {
    collection: Collection,
    index: usize,
    scroll_offset: RelativeOffset,
    pending: Option<RequestTag>,
    capture: Option<CaptureData>,
    failure: Option<Error>,
}

impl Session {
    /// Starts a session at `index`, clamped into the collection.
    ///
    /// Returns `None` for an empty collection.
    #[must_use]
    pub fn new(collection: Collection, index: usize, scroll_offset: RelativeOffset) -> Option<Self> {
        let last = collection.len().checked_sub(1)?;

        Some(Self {
            index: index.min(last),
            collection,
            scroll_offset,
            pending: None,
            capture: None,
            failure: None,
        })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of captures browsed; never zero.
    #[must_use]
    pub fn total(&self) -> usize {
        self.collection.len()
    }

    #[must_use]
    pub fn current_id(&self) -> &CaptureId {
        &self.collection[self.index]
    }

    #[must_use]
    pub fn scroll_offset(&self) -> RelativeOffset {
        self.scroll_offset
    }

    fn last_index(&self) -> usize {
        self.collection.len() - 1
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        Controls {
            previous_enabled: self.index > 0,
            next_enabled: self.index < self.last_index(),
        }
    }

    pub fn step_previous(&mut self) -> Step {
        if self.index > 0 {
            self.index -= 1;
            Step::Moved
        } else {
            Step::AtBoundary
        }
    }

    pub fn step_next(&mut self) -> Step {
        if self.index < self.last_index() {
            self.index += 1;
            Step::Moved
        } else {
            Step::AtBoundary
        }
    }

    /// Records `tag` as the only lookup whose result may be applied.
    pub fn set_pending(&mut self, tag: RequestTag) {
        self.pending = Some(tag);
    }

    #[must_use]
    pub fn pending(&self) -> Option<RequestTag> {
        self.pending
    }

    /// Returns true and clears the pending tag if `tag` is the pending one.
    pub fn accept(&mut self, tag: RequestTag) -> bool {
        if self.pending == Some(tag) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn set_loaded(&mut self, capture: CaptureData) {
        self.capture = Some(capture);
        self.failure = None;
    }

    pub fn set_failed(&mut self, error: Error) {
        self.capture = None;
        self.failure = Some(error);
    }

    #[must_use]
    pub fn capture(&self) -> Option<&CaptureData> {
        self.capture.as_ref()
    }

    #[must_use]
    pub fn failure(&self) -> Option<&Error> {
        self.failure.as_ref()
    }
}
