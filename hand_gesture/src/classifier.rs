//! The gesture state machine.
//!
//! One [`GestureClassifier`] instance owns one [`GestureState`] and is
//! stepped exactly once per arriving frame.  Discrete actions are
//! **edge-triggered**: a pinch held over many frames fires its event once,
//! on the frame it is entered, and cannot fire again until a non-pinch
//! frame releases it.  The scroll posture takes strict priority over every
//! pinch check — at rest the thumb sits closer to some fingertips than
//! others, so only one gesture family may be recognized per frame and
//! first-match-wins keeps simultaneous triggers out.

use serde::{Deserialize, Serialize};

use hand_stream::HandFrame;

use crate::config::ClassifierConfig;
use crate::features::{extract, FrameFeatures};
use crate::smooth::CursorSmoother;

// ════════════════════════════════════════════════════════════════════════════
// ActiveGesture
// ════════════════════════════════════════════════════════════════════════════

/// The gesture currently held, carried across frames for edge detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveGesture {
    Move,
    Click,
    RightClick,
    DoubleClick,
    Scroll,
}

// ════════════════════════════════════════════════════════════════════════════
// GestureState
// ════════════════════════════════════════════════════════════════════════════

/// The single persistent value of the classifier, mutated once per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureState {
    pub active: ActiveGesture,
    /// Previous scroll-posture frame's index-tip y — the scroll anchor.
    /// `None` whenever the hand is not in (or has just left) scroll posture.
    pub scroll_anchor: Option<f32>,
    /// Consecutive no-hand frames seen so far.
    pub dropout_streak: u32,
}

impl Default for GestureState {
    fn default() -> Self {
        GestureState {
            active: ActiveGesture::Move,
            scroll_anchor: None,
            dropout_streak: 0,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// GestureEvent / CursorPos / FrameOutput
// ════════════════════════════════════════════════════════════════════════════

/// A discrete action emitted on a qualifying state transition.
///
/// Click-family events carry the cursor position at the moment of entry.
/// A scroll delta is positive when the index finger moved downward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    Click { x: f32, y: f32 },
    RightClick { x: f32, y: f32 },
    DoubleClick { x: f32, y: f32 },
    Scroll { delta: f32 },
}

/// Screen-space cursor position, emitted every frame a hand is detected —
/// not gated by the active gesture, so a consumer can render a continuously
/// tracking pointer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CursorPos {
    pub x: f32,
    pub y: f32,
}

/// Everything one frame produces: the cursor stream plus at most one event.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FrameOutput {
    pub cursor: Option<CursorPos>,
    pub event: Option<GestureEvent>,
}

// ════════════════════════════════════════════════════════════════════════════
// GestureClassifier
// ════════════════════════════════════════════════════════════════════════════

/// Per-frame gesture classifier for one tracked hand.
///
/// The instance must be driven by a single caller at a time (one instance
/// per tracking session); it holds no ambient state and performs no I/O.
pub struct GestureClassifier {
    cfg: ClassifierConfig,
    state: GestureState,
    smoother: CursorSmoother,
}

impl GestureClassifier {
    pub fn new(cfg: ClassifierConfig) -> Self {
        let smoother = CursorSmoother::new(cfg.cursor_smoothing);
        GestureClassifier {
            cfg,
            state: GestureState::default(),
            smoother,
        }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.cfg
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Drop all per-session state, keeping the configuration.
    pub fn reset(&mut self) {
        self.state = GestureState::default();
        self.smoother.reset();
    }

    /// Classify one frame.
    ///
    /// `None` marks a frame with no detected hand: the state is held, the
    /// scroll anchor is kept (a transient tracking dropout is not a posture
    /// change), and nothing is emitted.  With
    /// [`anchor_dropout_frames`](ClassifierConfig::anchor_dropout_frames)
    /// set, a long enough dropout clears the anchor so scrolling cannot
    /// resume against a stale reference.
    pub fn process(&mut self, hand: Option<&HandFrame>) -> FrameOutput {
        let frame = match hand {
            Some(frame) => {
                self.state.dropout_streak = 0;
                frame
            }
            None => {
                self.state.dropout_streak = self.state.dropout_streak.saturating_add(1);
                if let Some(limit) = self.cfg.anchor_dropout_frames {
                    if self.state.dropout_streak >= limit {
                        self.state.scroll_anchor = None;
                    }
                }
                return FrameOutput::default();
            }
        };

        let features = extract(frame, &self.cfg);
        let (x, y) = self.smoother.sample(features.cursor_x, features.cursor_y);
        let cursor = CursorPos { x, y };
        let event = self.step(&features, cursor);

        FrameOutput {
            cursor: Some(cursor),
            event,
        }
    }

    /// Advance the state machine by one frame's features.
    fn step(&mut self, f: &FrameFeatures, cursor: CursorPos) -> Option<GestureEvent> {
        // ── Scroll posture — takes priority over every pinch check ────────
        if f.index_up && f.middle_up && f.index_middle_separation > self.cfg.separation_threshold {
            let mut event = None;
            if let Some(anchor) = self.state.scroll_anchor {
                let delta = (f.index_tip_y - anchor) * self.cfg.scroll_gain;
                if delta.abs() > self.cfg.scroll_deadzone {
                    self.state.active = ActiveGesture::Scroll;
                    event = Some(GestureEvent::Scroll { delta });
                }
            }
            // Re-anchor every qualifying frame: the delta is velocity-like,
            // measured between consecutive scroll frames, not a drag offset.
            self.state.scroll_anchor = Some(f.index_tip_y);
            return event;
        }

        // Leaving scroll posture re-arms the anchor before any pinch check.
        self.state.scroll_anchor = None;

        // ── Pinch posture — fixed priority index > middle > ring ──────────
        let target = if f.pinch_index_thumb < self.cfg.pinch_threshold {
            ActiveGesture::Click
        } else if f.pinch_middle_thumb < self.cfg.pinch_threshold {
            ActiveGesture::RightClick
        } else if f.pinch_ring_thumb < self.cfg.pinch_threshold {
            ActiveGesture::DoubleClick
        } else {
            ActiveGesture::Move
        };

        let entered = self.state.active != target;
        self.state.active = target;
        if !entered {
            return None;
        }

        match target {
            ActiveGesture::Click => Some(GestureEvent::Click {
                x: cursor.x,
                y: cursor.y,
            }),
            ActiveGesture::RightClick => Some(GestureEvent::RightClick {
                x: cursor.x,
                y: cursor.y,
            }),
            ActiveGesture::DoubleClick => Some(GestureEvent::DoubleClick {
                x: cursor.x,
                y: cursor.y,
            }),
            // Entering Move never emits; Scroll is never a pinch target.
            ActiveGesture::Move | ActiveGesture::Scroll => None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
