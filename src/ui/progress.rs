// SPDX-License-Identifier: MPL-2.0
//! Busy indicator shared by every outstanding capture lookup.
//!
//! Each lookup calls [`ProgressIndicator::begin`] when it is issued and
//! [`ProgressIndicator::end`] when its result arrives, stale or not. The
//! indicator stays busy while any lookup is outstanding, so overlapping loads
//! can never leave it showing the wrong state.

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.15;

#[derive(Debug, Clone, Default)]
pub struct ProgressIndicator {
    outstanding: usize,
    spinner_rotation: f32,
}

impl ProgressIndicator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one more request as in flight.
    pub fn begin(&mut self) {
        self.outstanding += 1;
    }

    /// Marks one request as finished. Unmatched calls are ignored.
    pub fn end(&mut self) {
        if self.outstanding == 0 {
            tracing::warn!("progress end without a matching begin");
            return;
        }

        self.outstanding -= 1;
        if self.outstanding == 0 {
            self.spinner_rotation = 0.0;
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.outstanding > 0
    }

    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// Advances the spinner animation while busy.
    pub fn tick(&mut self) {
        if self.is_busy() {
            self.spinner_rotation += SPINNER_SPEED;
            if self.spinner_rotation > std::f32::consts::TAU {
                self.spinner_rotation -= std::f32::consts::TAU;
            }
        }
    }

    /// Current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_makes_indicator_busy() {
        let mut progress = ProgressIndicator::new();
        assert!(!progress.is_busy());

        progress.begin();
        assert!(progress.is_busy());
    }

    #[test]
    fn overlapping_requests_keep_indicator_busy_until_last_end() {
        let mut progress = ProgressIndicator::new();
        progress.begin();
        progress.begin();

        progress.end();
        assert!(progress.is_busy());

        progress.end();
        assert!(!progress.is_busy());
    }

    #[test]
    fn unmatched_end_is_ignored() {
        let mut progress = ProgressIndicator::new();
        progress.end();
        assert_eq!(progress.outstanding(), 0);

        progress.begin();
        assert!(progress.is_busy());
    }

    #[test]
    fn spinner_only_turns_while_busy() {
        let mut progress = ProgressIndicator::new();
        progress.tick();
        assert_eq!(progress.spinner_rotation(), 0.0);

        progress.begin();
        progress.tick();
        assert!(progress.spinner_rotation() > 0.0);

        progress.end();
        assert_eq!(progress.spinner_rotation(), 0.0);
    }

    #[test]
    fn spinner_rotation_wraps_around() {
        let mut progress = ProgressIndicator::new();
        progress.begin();
        for _ in 0..200 {
            progress.tick();
        }
        assert!(progress.spinner_rotation() <= std::f32::consts::TAU);
    }
}
