//! Pointer-event sinks — the consumer side of the classifier.
//!
//! Acting on a gesture (clicking something, moving an OS cursor) belongs to
//! an external collaborator; [`PointerSink`] is that boundary.  Emission is
//! synchronous: the run loop hands every cursor update and event to the
//! sink on the frame it was produced.

use std::io::{self, Write};

use serde_json::json;
use tracing::{info, trace};

use hand_gesture::{CursorPos, GestureEvent};

// ════════════════════════════════════════════════════════════════════════════
// PointerSink trait
// ════════════════════════════════════════════════════════════════════════════

/// Consumer of the classifier's output stream.
pub trait PointerSink {
    /// Continuous cursor position, once per detected frame.
    fn pointer_moved(&mut self, cursor: CursorPos);
    /// A discrete, debounced action.
    fn gesture(&mut self, event: &GestureEvent);
}

// ════════════════════════════════════════════════════════════════════════════
// JsonlSink — one JSON object per line
// ════════════════════════════════════════════════════════════════════════════

/// Writes events as JSON lines.  Cursor motion is high-frequency noise for
/// most consumers, so it is only included when asked for.
pub struct JsonlSink<W: Write> {
    out: W,
    include_motion: bool,
}

impl JsonlSink<io::Stdout> {
    pub fn stdout(include_motion: bool) -> Self {
        JsonlSink {
            out: io::stdout(),
            include_motion,
        }
    }
}

impl<W: Write> JsonlSink<W> {
    pub fn new(out: W, include_motion: bool) -> Self {
        JsonlSink {
            out,
            include_motion,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PointerSink for JsonlSink<W> {
    fn pointer_moved(&mut self, cursor: CursorPos) {
        if self.include_motion {
            let line = json!({ "type": "pointer_move", "x": cursor.x, "y": cursor.y });
            let _ = writeln!(self.out, "{}", line);
        }
    }

    fn gesture(&mut self, event: &GestureEvent) {
        if let Ok(line) = serde_json::to_string(event) {
            let _ = writeln!(self.out, "{}", line);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// TraceSink — structured logging
// ════════════════════════════════════════════════════════════════════════════

/// Emits through `tracing`: events at `info`, cursor motion at `trace`.
pub struct TraceSink;

impl PointerSink for TraceSink {
    fn pointer_moved(&mut self, cursor: CursorPos) {
        trace!(x = cursor.x, y = cursor.y, "pointer");
    }

    fn gesture(&mut self, event: &GestureEvent) {
        match event {
            GestureEvent::Click { x, y } => info!(x, y, "click"),
            GestureEvent::RightClick { x, y } => info!(x, y, "right click"),
            GestureEvent::DoubleClick { x, y } => info!(x, y, "double click"),
            GestureEvent::Scroll { delta } => info!(delta, "scroll"),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// NullSink — discard everything
// ════════════════════════════════════════════════════════════════════════════

/// Swallows all output; useful for soak runs and timing.
pub struct NullSink;

impl PointerSink for NullSink {
    fn pointer_moved(&mut self, _cursor: CursorPos) {}
    fn gesture(&mut self, _event: &GestureEvent) {}
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
