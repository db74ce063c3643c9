//! Per-frame feature extraction.
//!
//! [`extract`] is a pure function of one frame's landmarks plus the screen
//! configuration — no state, no side effects.  Everything the gesture state
//! machine looks at comes out of here.

use hand_stream::{HandFrame, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP};

use crate::config::ClassifierConfig;

/// Features derived from one frame.  Ephemeral — recomputed every frame,
/// never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameFeatures {
    /// Index tip above its PIP joint.
    pub index_up: bool,
    /// Middle tip above its PIP joint.
    pub middle_up: bool,
    /// Euclidean thumb-tip ↔ index-tip distance, normalized units.
    pub pinch_index_thumb: f32,
    /// Euclidean thumb-tip ↔ middle-tip distance.
    pub pinch_middle_thumb: f32,
    /// Euclidean thumb-tip ↔ ring-tip distance.
    pub pinch_ring_thumb: f32,
    /// Euclidean index-tip ↔ middle-tip distance.
    pub index_middle_separation: f32,
    /// Index tip mapped to screen pixels, horizontally mirrored.
    pub cursor_x: f32,
    pub cursor_y: f32,
    /// Raw (unmapped) index-tip y, kept for scroll-anchor arithmetic.
    pub index_tip_y: f32,
}

/// Derive all per-frame features from a validated frame.
///
/// The cursor mapping mirrors x — the camera feed faces the user, so moving
/// the hand left must move the cursor left:
/// `cursor_x = (1 − index_tip.x) · screen_width`.
pub fn extract(frame: &HandFrame, cfg: &ClassifierConfig) -> FrameFeatures {
    let thumb = frame.thumb_tip();
    let index = frame.index_tip();
    let middle = frame.middle_tip();
    let ring = frame.ring_tip();

    FrameFeatures {
        index_up: frame.finger_up(INDEX_TIP, INDEX_PIP),
        middle_up: frame.finger_up(MIDDLE_TIP, MIDDLE_PIP),
        pinch_index_thumb: thumb.distance_to(&index),
        pinch_middle_thumb: thumb.distance_to(&middle),
        pinch_ring_thumb: thumb.distance_to(&ring),
        index_middle_separation: index.distance_to(&middle),
        cursor_x: (1.0 - index.x) * cfg.screen_width,
        cursor_y: index.y * cfg.screen_height,
        index_tip_y: index.y,
    }
}
