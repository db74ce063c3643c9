//! Frame sources — where per-frame landmark input comes from.
//!
//! A [`FrameSource`] delivers [`FramePacket`]s over a `mpsc` channel; the
//! run loop doesn't care whether they came from a recorded capture or the
//! posture simulator.  The channel has exactly one producer and one
//! consumer, so the classifier is only ever stepped by a single thread.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use hand_stream::{FrameError, HandFrame, Landmark};

// ════════════════════════════════════════════════════════════════════════════
// FramePacket / FrameRecord
// ════════════════════════════════════════════════════════════════════════════

/// One validated frame as delivered to the run loop.
/// `hand: None` means the tracker reported no detection for this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePacket {
    pub t_ms: u64,
    pub hand: Option<HandFrame>,
}

/// On-disk form of one captured frame: one JSON object per line.
///
/// ```json
/// {"t_ms":33,"hand":[{"x":0.5,"y":0.8}, …21 points…]}
/// {"t_ms":66}
/// ```
///
/// A missing or `null` `hand` field records a no-detection frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub t_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hand: Option<Vec<Landmark>>,
}

// ════════════════════════════════════════════════════════════════════════════
// TrackerConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration of the external hand-tracking collaborator.  Carried and
/// displayed here, never interpreted: a live tracker integration would
/// receive these values unmodified.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub max_hands: u8,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            max_hands: 1,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.7,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// FrameSource trait + spawn helper
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`FramePacket`]s over a channel.
pub trait FrameSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<FramePacket>);
}

/// Spawn a frame source on its own thread and return the receiving end.
/// The channel disconnects when the source finishes its stream.
pub fn spawn_frame_source<S: FrameSource>(source: S) -> Receiver<FramePacket> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}

// ════════════════════════════════════════════════════════════════════════════
// Pacing
// ════════════════════════════════════════════════════════════════════════════

/// How fast a replay is fed into the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep out the recorded `t_ms` gaps.
    Recorded,
    /// Fixed frames per second, ignoring recorded timestamps.
    Fixed(u32),
    /// No sleeping — batch processing.
    Unpaced,
}

// ════════════════════════════════════════════════════════════════════════════
// ReplayError
// ════════════════════════════════════════════════════════════════════════════

/// A capture file that cannot be replayed.  Landmark violations surface the
/// offending line so a broken capture fails loudly instead of feeding
/// nonsense into the geometry.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read capture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path}:{line}: malformed frame record: {source}")]
    Malformed {
        path: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path}:{line}: {source}")]
    InvalidFrame {
        path: String,
        line: usize,
        #[source]
        source: FrameError,
    },
}

// ════════════════════════════════════════════════════════════════════════════
// ReplayFrameSource
// ════════════════════════════════════════════════════════════════════════════

/// Streams a recorded capture file.  The whole file is parsed and validated
/// up front, so a malformed capture is rejected before a single frame is
/// delivered.
#[derive(Debug)]
pub struct ReplayFrameSource {
    packets: Vec<FramePacket>,
    pacing: Pacing,
}

impl ReplayFrameSource {
    pub fn from_path(path: &Path, pacing: Pacing) -> Result<Self, ReplayError> {
        let label = path.display().to_string();
        let file = File::open(path).map_err(|source| ReplayError::Io {
            path: label.clone(),
            source,
        })?;
        let packets = parse_capture(BufReader::new(file), &label)?;
        Ok(ReplayFrameSource { packets, pacing })
    }

    /// Number of frames in the capture.
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }
}

/// Parse a JSONL capture, validating every landmark at this boundary.
fn parse_capture<R: BufRead>(reader: R, path: &str) -> Result<Vec<FramePacket>, ReplayError> {
    let mut packets = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.map_err(|source| ReplayError::Io {
            path: path.to_string(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let record: FrameRecord =
            serde_json::from_str(&line).map_err(|source| ReplayError::Malformed {
                path: path.to_string(),
                line: line_no,
                source,
            })?;
        let hand = match record.hand {
            Some(points) => Some(HandFrame::from_points(&points).map_err(|source| {
                ReplayError::InvalidFrame {
                    path: path.to_string(),
                    line: line_no,
                    source,
                }
            })?),
            None => None,
        };
        packets.push(FramePacket {
            t_ms: record.t_ms,
            hand,
        });
    }
    Ok(packets)
}

impl FrameSource for ReplayFrameSource {
    fn run(self: Box<Self>, tx: Sender<FramePacket>) {
        let mut prev_t = None;
        for packet in self.packets {
            match self.pacing {
                Pacing::Recorded => {
                    if let Some(prev) = prev_t {
                        let gap = packet.t_ms.saturating_sub(prev);
                        if gap > 0 {
                            thread::sleep(Duration::from_millis(gap));
                        }
                    }
                    prev_t = Some(packet.t_ms);
                }
                Pacing::Fixed(fps) => {
                    thread::sleep(Duration::from_millis(1000 / u64::from(fps.max(1))));
                }
                Pacing::Unpaced => {}
            }
            if tx.send(packet).is_err() {
                return; // consumer hung up
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn hand_json() -> String {
        let points: Vec<String> = (0..21)
            .map(|i| format!(r#"{{"x":0.5,"y":{:.2}}}"#, 0.1 + i as f32 * 0.02))
            .collect();
        format!("[{}]", points.join(","))
    }

    #[test]
    fn parses_detection_and_dropout_lines() {
        let capture = format!(
            "{{\"t_ms\":0,\"hand\":{}}}\n{{\"t_ms\":33}}\n\n{{\"t_ms\":66,\"hand\":null}}\n",
            hand_json()
        );
        let packets = parse_capture(Cursor::new(capture), "test.jsonl").unwrap();
        assert_eq!(packets.len(), 3);
        assert!(packets[0].hand.is_some());
        assert!(packets[1].hand.is_none());
        assert!(packets[2].hand.is_none());
        assert_eq!(packets[1].t_ms, 33);
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let capture = format!("{{\"t_ms\":0,\"hand\":{}}}\nnot json\n", hand_json());
        match parse_capture(Cursor::new(capture), "test.jsonl") {
            Err(ReplayError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected Malformed, got {:?}", other.map(|p| p.len())),
        }
    }

    #[test]
    fn invalid_landmarks_rejected_with_line() {
        let capture = r#"{"t_ms":0,"hand":[{"x":0.5,"y":0.5}]}"#;
        match parse_capture(Cursor::new(capture), "test.jsonl") {
            Err(ReplayError::InvalidFrame { line, source, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(source, FrameError::WrongCount(1));
            }
            other => panic!("expected InvalidFrame, got {:?}", other.map(|p| p.len())),
        }
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = FrameRecord {
            t_ms: 42,
            hand: Some(vec![Landmark::new(0.25, 0.75)]),
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: FrameRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);

        // No-detection records stay terse.
        let none = FrameRecord {
            t_ms: 7,
            hand: None,
        };
        assert_eq!(serde_json::to_string(&none).unwrap(), r#"{"t_ms":7}"#);
    }

    #[test]
    fn from_path_reads_a_capture_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"t_ms\":0,\"hand\":{}}}", hand_json()).unwrap();
        writeln!(file, "{{\"t_ms\":33}}").unwrap();
        file.flush().unwrap();

        let source = ReplayFrameSource::from_path(file.path(), Pacing::Unpaced).unwrap();
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ReplayFrameSource::from_path(Path::new("/no/such/capture.jsonl"), Pacing::Unpaced)
            .unwrap_err();
        assert!(matches!(err, ReplayError::Io { .. }));
    }

    #[test]
    fn spawned_source_streams_until_done() {
        let capture = format!(
            "{{\"t_ms\":0,\"hand\":{}}}\n{{\"t_ms\":1}}\n{{\"t_ms\":2}}\n",
            hand_json()
        );
        let packets = parse_capture(Cursor::new(capture), "test.jsonl").unwrap();
        let source = ReplayFrameSource {
            packets,
            pacing: Pacing::Unpaced,
        };
        let rx = spawn_frame_source(source);
        assert_eq!(rx.iter().count(), 3);
    }

    #[test]
    fn tracker_defaults_pass_through() {
        let cfg = TrackerConfig::default();
        assert_eq!(cfg.max_hands, 1);
        assert_eq!(cfg.min_detection_confidence, 0.7);
        assert_eq!(cfg.min_tracking_confidence, 0.7);
    }
}
