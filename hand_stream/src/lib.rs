//! # hand_stream
//!
//! Normalized 21-point hand-landmark frames, as delivered once per video
//! frame by an external hand-tracking model.
//!
//! The tracker is a black box: it either reports "no hand" for a frame or
//! hands over 21 keypoints with `(x, y)` in normalized [0,1] image
//! coordinates (image y grows downward; any z component is dropped before
//! it reaches this crate).  Everything downstream only ever *reads* a
//! frame — landmarks are produced fresh each frame and never mutated.
//!
//! ## Index scheme
//!
//! The 21 points follow the fixed anatomical numbering used by common
//! hand-tracking models:
//!
//! | Index | Point | Index | Point |
//! |---|---|---|---|
//! | 0 | wrist | 11 | middle DIP |
//! | 1–4 | thumb CMC→tip | 12 | middle tip |
//! | 5 | index MCP | 13–16 | ring MCP→tip |
//! | 6 | index PIP | 17–20 | pinky MCP→tip |
//! | 7 | index DIP | | |
//! | 8 | index tip | | |
//!
//! ## Validation
//!
//! A [`HandFrame`] can only be built through [`HandFrame::from_points`] (or
//! [`HandFrame::from_xy`]), which rejects a wrong landmark count and any
//! non-finite or out-of-range coordinate with [`FrameError`].  A malformed
//! frame is a contract violation by the upstream tracker; it must fail at
//! this boundary instead of leaking into geometry downstream.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ════════════════════════════════════════════════════════════════════════════
// Landmark indices
// ════════════════════════════════════════════════════════════════════════════

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in one tracked hand.
pub const LANDMARK_COUNT: usize = 21;

// ════════════════════════════════════════════════════════════════════════════
// Landmark
// ════════════════════════════════════════════════════════════════════════════

/// One normalized 2D keypoint of a tracked hand.
///
/// Coordinates live in [0,1] image space; `y` grows downward (so a raised
/// fingertip has a *smaller* `y` than the joint below it).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Landmark { x, y }
    }

    /// Euclidean distance to another landmark, in normalized units.
    pub fn distance_to(&self, other: &Landmark) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// True if both coordinates are finite and within [0,1].
    pub fn is_normalized(&self) -> bool {
        in_unit_range(self.x) && in_unit_range(self.y)
    }
}

fn in_unit_range(v: f32) -> bool {
    v.is_finite() && (0.0..=1.0).contains(&v)
}

// ════════════════════════════════════════════════════════════════════════════
// FrameError
// ════════════════════════════════════════════════════════════════════════════

/// Invalid landmark input — the upstream tracker broke its contract.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FrameError {
    #[error("invalid landmark input: expected {LANDMARK_COUNT} landmarks, got {0}")]
    WrongCount(usize),

    #[error(
        "invalid landmark input: landmark {index} at ({x}, {y}) is outside \
         normalized [0,1] coordinates"
    )]
    OutOfRange { index: usize, x: f32, y: f32 },
}

// ════════════════════════════════════════════════════════════════════════════
// HandFrame
// ════════════════════════════════════════════════════════════════════════════

/// One validated frame of 21 hand landmarks.
///
/// Construction goes through [`HandFrame::from_points`]; once built, a frame
/// is read-only.
#[derive(Clone, Debug, PartialEq)]
pub struct HandFrame {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandFrame {
    /// Build a frame from exactly 21 landmarks, validating every coordinate.
    pub fn from_points(points: &[Landmark]) -> Result<Self, FrameError> {
        if points.len() != LANDMARK_COUNT {
            return Err(FrameError::WrongCount(points.len()));
        }
        for (index, p) in points.iter().enumerate() {
            if !p.is_normalized() {
                return Err(FrameError::OutOfRange {
                    index,
                    x: p.x,
                    y: p.y,
                });
            }
        }
        let mut arr = [Landmark::new(0.0, 0.0); LANDMARK_COUNT];
        arr.copy_from_slice(points);
        Ok(HandFrame { points: arr })
    }

    /// Build a frame from a flat `[x0, y0, x1, y1, …]` slice of 42 floats,
    /// the layout most trackers hand over.
    pub fn from_xy(flat: &[f32]) -> Result<Self, FrameError> {
        if flat.len() != LANDMARK_COUNT * 2 {
            return Err(FrameError::WrongCount(flat.len() / 2));
        }
        let points: Vec<Landmark> = flat
            .chunks_exact(2)
            .map(|c| Landmark::new(c[0], c[1]))
            .collect();
        Self::from_points(&points)
    }

    /// Landmark at an anatomical index (see the index constants).
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANDMARK_COUNT`; callers use the named constants.
    pub fn get(&self, index: usize) -> Landmark {
        self.points[index]
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }

    // ── the points the classifier reads ──────────────────────────────────

    pub fn wrist(&self) -> Landmark {
        self.points[WRIST]
    }
    pub fn thumb_tip(&self) -> Landmark {
        self.points[THUMB_TIP]
    }
    pub fn index_pip(&self) -> Landmark {
        self.points[INDEX_PIP]
    }
    pub fn index_tip(&self) -> Landmark {
        self.points[INDEX_TIP]
    }
    pub fn middle_pip(&self) -> Landmark {
        self.points[MIDDLE_PIP]
    }
    pub fn middle_tip(&self) -> Landmark {
        self.points[MIDDLE_TIP]
    }
    pub fn ring_tip(&self) -> Landmark {
        self.points[RING_TIP]
    }

    /// True if the finger whose tip/PIP indices are given is raised:
    /// the tip sits *above* the PIP joint on screen (smaller y).
    pub fn finger_up(&self, tip: usize, pip: usize) -> bool {
        self.points[tip].y < self.points[pip].y
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
