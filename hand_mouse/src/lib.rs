//! # hand_mouse
//!
//! Driver application around the gesture classifier: it owns the frame
//! sources, the pointer-event sinks, and the per-frame run loop.  The
//! classifier itself stays pure — this crate is where frames come from and
//! where events go.
//!
//! ## Frame sources
//!
//! Landmark detection is an external collaborator, so no camera or model
//! lives here.  Two sources are provided behind one trait:
//!
//! * [`source::ReplayFrameSource`] — streams a recorded capture (JSON
//!   lines, one [`source::FrameRecord`] per line), paced as recorded, at a
//!   fixed rate, or flat out.
//! * [`script::ScriptFrameSource`] — synthesizes frames from a posture
//!   script, so the whole pipeline runs with no hardware at all.
//!
//! ## Pointer sinks
//!
//! Acting on events (moving an OS cursor, clicking a DOM element) is the
//! consumer's business.  [`dispatch::PointerSink`] is that boundary, with
//! JSON-lines, structured-log, and null implementations.

pub mod app;
pub mod dispatch;
pub mod script;
pub mod source;
