//! Scripted posture simulation — run the whole pipeline with no tracker.
//!
//! A script is a list of [`ScriptStep`]s, each holding one [`Posture`] for a
//! number of frames.  Postures are synthesized as geometrically plausible
//! 21-point hands, so the classifier sees the same shapes a real tracker
//! would produce.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use hand_stream::{
    HandFrame, Landmark, INDEX_TIP, LANDMARK_COUNT, MIDDLE_TIP, THUMB_TIP,
};

use crate::source::{FramePacket, FrameSource};

// ════════════════════════════════════════════════════════════════════════════
// Posture
// ════════════════════════════════════════════════════════════════════════════

/// One simulated hand posture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Posture {
    /// Index raised, middle curled, no pinch; the whole hand shifted so the
    /// index tip sits at `(x, y)` (normalized coordinates).
    MoveTo { x: f32, y: f32 },
    /// Thumb tip brought onto the index tip.
    PinchIndex,
    /// Thumb tip brought onto the (curled) middle tip.
    PinchMiddle,
    /// Thumb tip brought onto the ring tip.
    PinchRing,
    /// Index and middle raised and spread, index tip at height `y`.
    ScrollAt { y: f32 },
    /// No hand detected.
    Lost,
}

/// A posture held for `frames` consecutive frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptStep {
    pub posture: Posture,
    pub frames: u32,
}

impl ScriptStep {
    pub fn new(posture: Posture, frames: u32) -> Self {
        ScriptStep { posture, frames }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Posture synthesis
// ════════════════════════════════════════════════════════════════════════════

/// Open hand, palm to camera, fingers up, thumb clear of every fingertip.
/// Index tip at (0.43, 0.33).
const BASE_HAND: [(f32, f32); LANDMARK_COUNT] = [
    (0.50, 0.80), // wrist
    (0.42, 0.72),
    (0.38, 0.66),
    (0.35, 0.60),
    (0.33, 0.55), // thumb tip
    (0.44, 0.60),
    (0.43, 0.48),
    (0.43, 0.40),
    (0.43, 0.33), // index tip
    (0.50, 0.59),
    (0.50, 0.46),
    (0.50, 0.38),
    (0.50, 0.30), // middle tip
    (0.56, 0.60),
    (0.56, 0.48),
    (0.56, 0.41),
    (0.56, 0.34), // ring tip
    (0.61, 0.62),
    (0.62, 0.52),
    (0.62, 0.46),
    (0.62, 0.41), // pinky tip
];

fn build(edits: &[(usize, f32, f32)], shift: (f32, f32)) -> HandFrame {
    let mut points: Vec<Landmark> = BASE_HAND
        .iter()
        .map(|&(x, y)| {
            Landmark::new(
                (x + shift.0).clamp(0.0, 1.0),
                (y + shift.1).clamp(0.0, 1.0),
            )
        })
        .collect();
    for &(i, x, y) in edits {
        points[i] = Landmark::new(x.clamp(0.0, 1.0), y.clamp(0.0, 1.0));
    }
    HandFrame::from_points(&points).expect("synthetic postures stay in normalized range")
}

/// Synthesize the landmark frame for a posture; `None` for [`Posture::Lost`].
pub fn synthesize(posture: Posture) -> Option<HandFrame> {
    const CURLED_MIDDLE: (usize, f32, f32) = (MIDDLE_TIP, 0.50, 0.52);
    match posture {
        Posture::Lost => None,
        Posture::MoveTo { x, y } => {
            let (bx, by) = BASE_HAND[INDEX_TIP];
            let (dx, dy) = (x - bx, y - by);
            // the curled middle tip follows the hand shift
            let curled = (MIDDLE_TIP, 0.50 + dx, 0.52 + dy);
            Some(build(&[curled], (dx, dy)))
        }
        Posture::PinchIndex => Some(build(&[CURLED_MIDDLE, (THUMB_TIP, 0.45, 0.36)], (0.0, 0.0))),
        Posture::PinchMiddle => Some(build(&[CURLED_MIDDLE, (THUMB_TIP, 0.49, 0.53)], (0.0, 0.0))),
        Posture::PinchRing => Some(build(&[CURLED_MIDDLE, (THUMB_TIP, 0.55, 0.35)], (0.0, 0.0))),
        Posture::ScrollAt { y } => Some(build(&[(INDEX_TIP, 0.43, y)], (0.0, 0.0))),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ScriptFrameSource
// ════════════════════════════════════════════════════════════════════════════

/// Frame source that plays a posture script at a fixed rate.
/// `fps = 0` streams without sleeping.
pub struct ScriptFrameSource {
    steps: Vec<ScriptStep>,
    fps: u32,
}

impl ScriptFrameSource {
    pub fn new(steps: Vec<ScriptStep>, fps: u32) -> Self {
        ScriptFrameSource { steps, fps }
    }

    /// Total frames the script will deliver.
    pub fn frame_count(&self) -> usize {
        self.steps.iter().map(|s| s.frames as usize).sum()
    }
}

impl FrameSource for ScriptFrameSource {
    fn run(self: Box<Self>, tx: Sender<FramePacket>) {
        let interval_ms = if self.fps == 0 { 0 } else { 1000 / u64::from(self.fps) };
        let mut t_ms = 0;
        for step in &self.steps {
            for _ in 0..step.frames {
                let packet = FramePacket {
                    t_ms,
                    hand: synthesize(step.posture),
                };
                if tx.send(packet).is_err() {
                    return;
                }
                t_ms += interval_ms.max(33); // recorded timeline stays plausible
                if interval_ms > 0 {
                    thread::sleep(Duration::from_millis(interval_ms));
                }
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Built-in scripts
// ════════════════════════════════════════════════════════════════════════════

/// A tour of every gesture: move, click, scroll through a dropout, then the
/// remaining pinch families.
pub fn demo_script() -> Vec<ScriptStep> {
    vec![
        ScriptStep::new(Posture::MoveTo { x: 0.43, y: 0.33 }, 5),
        ScriptStep::new(Posture::MoveTo { x: 0.55, y: 0.40 }, 5),
        ScriptStep::new(Posture::PinchIndex, 4),
        ScriptStep::new(Posture::MoveTo { x: 0.55, y: 0.40 }, 3),
        ScriptStep::new(Posture::ScrollAt { y: 0.33 }, 1),
        ScriptStep::new(Posture::ScrollAt { y: 0.38 }, 1),
        ScriptStep::new(Posture::ScrollAt { y: 0.43 }, 1),
        ScriptStep::new(Posture::Lost, 3),
        ScriptStep::new(Posture::ScrollAt { y: 0.47 }, 1),
        ScriptStep::new(Posture::MoveTo { x: 0.50, y: 0.45 }, 3),
        ScriptStep::new(Posture::PinchMiddle, 3),
        ScriptStep::new(Posture::MoveTo { x: 0.50, y: 0.45 }, 3),
        ScriptStep::new(Posture::PinchRing, 3),
        ScriptStep::new(Posture::MoveTo { x: 0.50, y: 0.45 }, 2),
    ]
}

/// Click / right-click / double-click with releases in between — three
/// edge-triggered events, regardless of how long each pinch is held.
pub fn clicks_script() -> Vec<ScriptStep> {
    vec![
        ScriptStep::new(Posture::MoveTo { x: 0.43, y: 0.33 }, 3),
        ScriptStep::new(Posture::PinchIndex, 6),
        ScriptStep::new(Posture::MoveTo { x: 0.43, y: 0.33 }, 3),
        ScriptStep::new(Posture::PinchMiddle, 6),
        ScriptStep::new(Posture::MoveTo { x: 0.43, y: 0.33 }, 3),
        ScriptStep::new(Posture::PinchRing, 6),
        ScriptStep::new(Posture::MoveTo { x: 0.43, y: 0.33 }, 3),
    ]
}

/// A downward then upward scroll sweep.
pub fn scroll_script() -> Vec<ScriptStep> {
    // Index tip sweeps 0.30 → 0.45 and back; it must stay above the index
    // PIP (y = 0.48) or the posture stops being a scroll.
    let mut steps = vec![ScriptStep::new(Posture::ScrollAt { y: 0.30 }, 2)];
    for i in 1..=5 {
        steps.push(ScriptStep::new(
            Posture::ScrollAt { y: 0.30 + i as f32 * 0.03 },
            1,
        ));
    }
    for i in (0..5).rev() {
        steps.push(ScriptStep::new(
            Posture::ScrollAt { y: 0.30 + i as f32 * 0.03 },
            1,
        ));
    }
    steps
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_gesture::{extract, ClassifierConfig};

    #[test]
    fn synthesized_postures_classify_as_intended() {
        let cfg = ClassifierConfig::default();

        let f = extract(&synthesize(Posture::MoveTo { x: 0.43, y: 0.33 }).unwrap(), &cfg);
        assert!(f.index_up);
        assert!(!f.middle_up);
        assert!(f.pinch_index_thumb >= cfg.pinch_threshold);
        assert!(f.pinch_middle_thumb >= cfg.pinch_threshold);
        assert!(f.pinch_ring_thumb >= cfg.pinch_threshold);

        let f = extract(&synthesize(Posture::PinchIndex).unwrap(), &cfg);
        assert!(f.pinch_index_thumb < cfg.pinch_threshold);

        let f = extract(&synthesize(Posture::PinchMiddle).unwrap(), &cfg);
        assert!(f.pinch_index_thumb >= cfg.pinch_threshold);
        assert!(f.pinch_middle_thumb < cfg.pinch_threshold);

        let f = extract(&synthesize(Posture::PinchRing).unwrap(), &cfg);
        assert!(f.pinch_index_thumb >= cfg.pinch_threshold);
        assert!(f.pinch_middle_thumb >= cfg.pinch_threshold);
        assert!(f.pinch_ring_thumb < cfg.pinch_threshold);

        let f = extract(&synthesize(Posture::ScrollAt { y: 0.40 }).unwrap(), &cfg);
        assert!(f.index_up && f.middle_up);
        assert!(f.index_middle_separation > cfg.separation_threshold);
        assert!((f.index_tip_y - 0.40).abs() < 1e-6);

        assert_eq!(synthesize(Posture::Lost), None);
    }

    #[test]
    fn move_to_places_the_index_tip() {
        let frame = synthesize(Posture::MoveTo { x: 0.60, y: 0.50 }).unwrap();
        let tip = frame.index_tip();
        assert!((tip.x - 0.60).abs() < 1e-6);
        assert!((tip.y - 0.50).abs() < 1e-6);
        // Still a move posture after the shift.
        let f = extract(&frame, &ClassifierConfig::default());
        assert!(f.index_up);
        assert!(!f.middle_up);
    }

    #[test]
    fn extreme_move_targets_stay_normalized() {
        // Clamping keeps every point in range even at the screen edge.
        assert!(synthesize(Posture::MoveTo { x: 0.02, y: 0.95 }).is_some());
        assert!(synthesize(Posture::MoveTo { x: 0.98, y: 0.05 }).is_some());
    }

    #[test]
    fn frame_count_sums_steps() {
        let source = ScriptFrameSource::new(clicks_script(), 0);
        assert_eq!(source.frame_count(), 30);
    }

    #[test]
    fn script_source_delivers_every_frame() {
        use crate::source::spawn_frame_source;
        let steps = vec![
            ScriptStep::new(Posture::MoveTo { x: 0.43, y: 0.33 }, 2),
            ScriptStep::new(Posture::Lost, 1),
        ];
        let rx = spawn_frame_source(ScriptFrameSource::new(steps, 0));
        let packets: Vec<_> = rx.iter().collect();
        assert_eq!(packets.len(), 3);
        assert!(packets[0].hand.is_some());
        assert!(packets[2].hand.is_none());
    }
}
