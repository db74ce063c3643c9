//! The run loop: frames in, pointer events out.
//!
//! One frame source feeds one classifier feeds one sink, all driven from a
//! single consumer loop — the classifier is never touched from more than
//! one thread.

use std::fmt;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use thiserror::Error;
use tracing::{debug, info};

use hand_gesture::{ClassifierConfig, GestureClassifier};

use crate::dispatch::{JsonlSink, NullSink, PointerSink, TraceSink};
use crate::script::{ScriptFrameSource, ScriptStep};
use crate::source::{
    spawn_frame_source, FramePacket, Pacing, ReplayError, ReplayFrameSource, TrackerConfig,
};

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Where frames come from.
#[derive(Clone, Debug)]
pub enum SourceConfig {
    Replay { path: PathBuf, pacing: Pacing },
    Script { steps: Vec<ScriptStep>, fps: u32 },
}

/// Where output goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SinkConfig {
    /// JSON lines on stdout; `motion` includes the cursor stream.
    Jsonl { motion: bool },
    /// Structured log records.
    Trace,
    /// Discard (soak runs).
    Null,
}

/// Configuration for a full session.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub classifier: ClassifierConfig,
    pub tracker: TrackerConfig,
    pub source: SourceConfig,
    pub sink: SinkConfig,
}

// ════════════════════════════════════════════════════════════════════════════
// AppError / RunSummary
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Replay(#[from] ReplayError),
}

/// Counters for one completed session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: usize,
    pub dropouts: usize,
    pub cursor_updates: usize,
    pub events: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} frames ({} without a hand), {} cursor updates, {} events",
            self.frames, self.dropouts, self.cursor_updates, self.events
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — session entry point
// ════════════════════════════════════════════════════════════════════════════

/// Run a full session to completion.
pub fn run(cfg: AppConfig) -> Result<RunSummary, AppError> {
    info!(
        max_hands = cfg.tracker.max_hands,
        min_detection_confidence = cfg.tracker.min_detection_confidence,
        min_tracking_confidence = cfg.tracker.min_tracking_confidence,
        "tracker configuration (passed through to the tracking collaborator)"
    );

    let rx = match cfg.source {
        SourceConfig::Replay { path, pacing } => {
            let source = ReplayFrameSource::from_path(&path, pacing)?;
            info!(
                frames = source.len(),
                path = %path.display(),
                ?pacing,
                "replaying capture"
            );
            spawn_frame_source(source)
        }
        SourceConfig::Script { steps, fps } => {
            let source = ScriptFrameSource::new(steps, fps);
            info!(frames = source.frame_count(), fps, "running posture script");
            spawn_frame_source(source)
        }
    };

    let mut classifier = GestureClassifier::new(cfg.classifier);
    let summary = match cfg.sink {
        SinkConfig::Jsonl { motion } => {
            drive(rx, &mut classifier, &mut JsonlSink::stdout(motion))
        }
        SinkConfig::Trace => drive(rx, &mut classifier, &mut TraceSink),
        SinkConfig::Null => drive(rx, &mut classifier, &mut NullSink),
    };

    info!(%summary, "session ended");
    Ok(summary)
}

/// Drain the frame channel through the classifier into the sink.
/// Returns when the source disconnects.
pub fn drive(
    rx: Receiver<FramePacket>,
    classifier: &mut GestureClassifier,
    sink: &mut dyn PointerSink,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for packet in rx {
        let out = classifier.process(packet.hand.as_ref());
        summary.frames += 1;
        if packet.hand.is_none() {
            summary.dropouts += 1;
        }
        if let Some(cursor) = out.cursor {
            sink.pointer_moved(cursor);
            summary.cursor_updates += 1;
        }
        if let Some(event) = out.event {
            debug!(?event, t_ms = packet.t_ms, "gesture");
            sink.gesture(&event);
            summary.events += 1;
        }
    }

    summary
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::{clicks_script, demo_script, scroll_script, Posture};
    use hand_gesture::GestureEvent;

    /// Records everything it is handed.
    #[derive(Default)]
    struct CollectSink {
        cursors: usize,
        events: Vec<GestureEvent>,
    }

    impl PointerSink for CollectSink {
        fn pointer_moved(&mut self, _cursor: hand_gesture::CursorPos) {
            self.cursors += 1;
        }
        fn gesture(&mut self, event: &GestureEvent) {
            self.events.push(event.clone());
        }
    }

    fn run_script(steps: Vec<ScriptStep>) -> (RunSummary, CollectSink) {
        let rx = spawn_frame_source(ScriptFrameSource::new(steps, 0));
        let mut classifier = GestureClassifier::new(ClassifierConfig::default());
        let mut sink = CollectSink::default();
        let summary = drive(rx, &mut classifier, &mut sink);
        (summary, sink)
    }

    #[test]
    fn clicks_script_fires_each_family_once() {
        let (summary, sink) = run_script(clicks_script());
        assert_eq!(summary.frames, 30);
        assert_eq!(summary.events, 3);
        assert!(matches!(sink.events[0], GestureEvent::Click { .. }));
        assert!(matches!(sink.events[1], GestureEvent::RightClick { .. }));
        assert!(matches!(sink.events[2], GestureEvent::DoubleClick { .. }));
    }

    #[test]
    fn scroll_script_scrolls_down_then_up() {
        let (_, sink) = run_script(scroll_script());
        let deltas: Vec<f32> = sink
            .events
            .iter()
            .map(|e| match e {
                GestureEvent::Scroll { delta } => *delta,
                other => panic!("unexpected event {:?}", other),
            })
            .collect();
        assert_eq!(deltas.len(), 10);
        assert!(deltas[..5].iter().all(|&d| d > 0.0));
        assert!(deltas[5..].iter().all(|&d| d < 0.0));
    }

    #[test]
    fn dropout_frames_are_counted_but_silent() {
        let steps = vec![
            ScriptStep::new(Posture::MoveTo { x: 0.43, y: 0.33 }, 2),
            ScriptStep::new(Posture::Lost, 3),
            ScriptStep::new(Posture::MoveTo { x: 0.43, y: 0.33 }, 2),
        ];
        let (summary, sink) = run_script(steps);
        assert_eq!(summary.frames, 7);
        assert_eq!(summary.dropouts, 3);
        assert_eq!(summary.cursor_updates, 4);
        assert!(sink.events.is_empty());
    }

    #[test]
    fn demo_script_covers_every_event_family() {
        let (_, sink) = run_script(demo_script());
        assert!(sink.events.iter().any(|e| matches!(e, GestureEvent::Click { .. })));
        assert!(sink
            .events
            .iter()
            .any(|e| matches!(e, GestureEvent::RightClick { .. })));
        assert!(sink
            .events
            .iter()
            .any(|e| matches!(e, GestureEvent::DoubleClick { .. })));
        assert!(sink.events.iter().any(|e| matches!(e, GestureEvent::Scroll { .. })));
    }

    #[test]
    fn summary_display_reads_naturally() {
        let summary = RunSummary {
            frames: 10,
            dropouts: 2,
            cursor_updates: 8,
            events: 1,
        };
        assert_eq!(
            summary.to_string(),
            "10 frames (2 without a hand), 8 cursor updates, 1 events"
        );
    }
}
