//! Tunable thresholds and screen mapping for the classifier.

use serde::{Deserialize, Serialize};

// Threshold defaults, tuned against normalized [0,1] landmark coordinates.
pub const DEFAULT_PINCH_THRESHOLD: f32 = 0.05; // fingertip distance
pub const DEFAULT_SEPARATION_THRESHOLD: f32 = 0.05; // index–middle spread
pub const DEFAULT_SCROLL_GAIN: f32 = 1000.0; // normalized Δy → scroll units
pub const DEFAULT_SCROLL_DEADZONE: f32 = 10.0; // post-gain scroll units

/// Classifier configuration.
///
/// All fields are plain scalars supplied by the embedding application; the
/// classifier never re-derives them.  `Default` gives the tuned values above
/// on a 1920×1080 screen, with smoothing off and the scroll anchor surviving
/// tracking dropouts indefinitely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Two fingertips closer than this count as a pinch.
    pub pinch_threshold: f32,
    /// Index and middle tips farther apart than this (with both raised)
    /// count as the scroll posture.
    pub separation_threshold: f32,
    /// Multiplier from normalized vertical motion to scroll delta.
    pub scroll_gain: f32,
    /// Post-gain deltas at or below this magnitude are discarded.
    pub scroll_deadzone: f32,
    /// Target screen size for cursor mapping, in pixels.
    pub screen_width: f32,
    pub screen_height: f32,
    /// Exponential cursor smoothing factor; 1.0 disables smoothing,
    /// larger values are smoother but laggier.
    pub cursor_smoothing: f32,
    /// Clear the scroll anchor after this many consecutive no-hand frames.
    /// `None` keeps the anchor through dropouts of any length.
    pub anchor_dropout_frames: Option<u32>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            pinch_threshold: DEFAULT_PINCH_THRESHOLD,
            separation_threshold: DEFAULT_SEPARATION_THRESHOLD,
            scroll_gain: DEFAULT_SCROLL_GAIN,
            scroll_deadzone: DEFAULT_SCROLL_DEADZONE,
            screen_width: 1920.0,
            screen_height: 1080.0,
            cursor_smoothing: 1.0,
            anchor_dropout_frames: None,
        }
    }
}

impl ClassifierConfig {
    /// Default thresholds on a given screen.
    pub fn for_screen(width: f32, height: f32) -> Self {
        ClassifierConfig {
            screen_width: width,
            screen_height: height,
            ..Default::default()
        }
    }
}
