// SPDX-License-Identifier: MPL-2.0
//! Open/close state machine of the preview dialog.
//!
//! Opening fades the gallery out, then fades the dialog in. Closing fades the
//! dialog out, then reveals the gallery and fades it in. The machine is driven
//! by explicit `now` instants so transitions are deterministic under test.

use std::time::{Duration, Instant};

/// Durations of the two fades.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transitions {
    pub gallery: Duration,
    pub dialog: Duration,
}

impl Transitions {
    #[must_use]
    pub fn from_millis(gallery_ms: u64, dialog_ms: u64) -> Self {
        Self {
            gallery: Duration::from_millis(gallery_ms),
            dialog: Duration::from_millis(dialog_ms),
        }
    }
}

/// Phase of a running transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The gallery fade (out when opening, in when closing).
    Gallery,
    /// The dialog fade (in when opening, out when closing).
    Dialog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Opening {
        stage: Stage,
        started_at: Instant,
    },
    Open,
    Closing {
        stage: Stage,
        started_at: Instant,
    },
}

/// Notable moments reported by [`DialogState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    /// The gallery became visible again during closing.
    GalleryRevealed,
    /// The dialog finished opening.
    Opened,
    /// The dialog finished closing.
    Closed,
}

/// Opacity of the two layers at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacities {
    pub gallery: f32,
    pub dialog: f32,
}

impl DialogState {
    /// True while opening or open: the dialog owns keyboard input.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Opening { .. } | Self::Open)
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Opening { .. } | Self::Closing { .. })
    }

    /// Whether the gallery grid takes part in layout and input.
    #[must_use]
    pub fn gallery_visible(&self) -> bool {
        match self {
            Self::Closed => true,
            Self::Opening { stage, .. } | Self::Closing { stage, .. } => *stage == Stage::Gallery,
            Self::Open => false,
        }
    }

    /// Whether the dialog takes part in layout and input.
    #[must_use]
    pub fn dialog_visible(&self) -> bool {
        match self {
            Self::Closed => false,
            Self::Opening { stage, .. } | Self::Closing { stage, .. } => *stage == Stage::Dialog,
            Self::Open => true,
        }
    }

    /// Starts opening unless already opening or open.
    pub fn open(&mut self, now: Instant) {
        if !self.is_open() {
            *self = Self::Opening {
                stage: Stage::Gallery,
                started_at: now,
            };
        }
    }

    /// Starts closing. Returns `None` when already closing or closed,
    /// otherwise the milestones reached right away.
    ///
    /// Closing mid-open runs the current fade backwards from the opacity it
    /// has reached.
    pub fn close(&mut self, now: Instant, transitions: Transitions) -> Option<Vec<Milestone>> {
        match *self {
            Self::Closed | Self::Closing { .. } => None,
            Self::Open => {
                *self = Self::Closing {
                    stage: Stage::Dialog,
                    started_at: now,
                };
                Some(Vec::new())
            }
            Self::Opening { stage, started_at } => {
                let duration = stage_duration(stage, transitions);
                let elapsed = now.saturating_duration_since(started_at);
                let remaining = duration.saturating_sub(elapsed);
                *self = Self::Closing {
                    stage,
                    started_at: now.checked_sub(remaining).unwrap_or(now),
                };
                match stage {
                    Stage::Gallery => Some(vec![Milestone::GalleryRevealed]),
                    Stage::Dialog => Some(Vec::new()),
                }
            }
        }
    }

    /// Moves through every stage whose duration has elapsed at `now`.
    pub fn advance(&mut self, now: Instant, transitions: Transitions) -> Vec<Milestone> {
        let mut milestones = Vec::new();

        loop {
            let next = match *self {
                Self::Opening { stage, started_at } => {
                    let duration = stage_duration(stage, transitions);
                    if now.saturating_duration_since(started_at) < duration {
                        break;
                    }
                    match stage {
                        Stage::Gallery => Self::Opening {
                            stage: Stage::Dialog,
                            started_at: started_at + duration,
                        },
                        Stage::Dialog => {
                            milestones.push(Milestone::Opened);
                            Self::Open
                        }
                    }
                }
                Self::Closing { stage, started_at } => {
                    let duration = stage_duration(stage, transitions);
                    if now.saturating_duration_since(started_at) < duration {
                        break;
                    }
                    match stage {
                        Stage::Dialog => {
                            milestones.push(Milestone::GalleryRevealed);
                            Self::Closing {
                                stage: Stage::Gallery,
                                started_at: started_at + duration,
                            }
                        }
                        Stage::Gallery => {
                            milestones.push(Milestone::Closed);
                            Self::Closed
                        }
                    }
                }
                Self::Open | Self::Closed => break,
            };
            *self = next;
        }

        milestones
    }

    /// Layer opacities at `now`.
    #[must_use]
    pub fn opacities(&self, now: Instant, transitions: Transitions) -> Opacities {
        match *self {
            Self::Closed => Opacities {
                gallery: 1.0,
                dialog: 0.0,
            },
            Self::Open => Opacities {
                gallery: 0.0,
                dialog: 1.0,
            },
            Self::Opening { stage, started_at } => {
                let p = progress(now, started_at, stage_duration(stage, transitions));
                match stage {
                    Stage::Gallery => Opacities {
                        gallery: 1.0 - p,
                        dialog: 0.0,
                    },
                    Stage::Dialog => Opacities {
                        gallery: 0.0,
                        dialog: p,
                    },
                }
            }
            Self::Closing { stage, started_at } => {
                let p = progress(now, started_at, stage_duration(stage, transitions));
                match stage {
                    Stage::Dialog => Opacities {
                        gallery: 0.0,
                        dialog: 1.0 - p,
                    },
                    Stage::Gallery => Opacities {
                        gallery: p,
                        dialog: 0.0,
                    },
                }
            }
        }
    }
}

fn stage_duration(stage: Stage, transitions: Transitions) -> Duration {
    match stage {
        Stage::Gallery => transitions.gallery,
        Stage::Dialog => transitions.dialog,
    }
}

fn progress(now: Instant, started_at: Instant, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(started_at);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}
