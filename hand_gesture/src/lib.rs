//! # hand_gesture
//!
//! Real-time classification of one tracked hand into discrete, debounced
//! pointer actions, plus a continuous cursor-position stream.
//!
//! ## Posture → action mapping
//!
//! | Posture | Action |
//! |---|---|
//! | Index finger raised | Cursor follows the (mirrored) index tip |
//! | Thumb–index pinch | `Click` — fires once on entry |
//! | Thumb–middle pinch | `RightClick` — fires once on entry |
//! | Thumb–ring pinch | `DoubleClick` — fires once on entry |
//! | Index + middle raised and spread | Scroll — delta follows vertical hand motion |
//!
//! ## Pipeline
//!
//! Data flows one way per frame, with no memory beyond a single
//! [`GestureState`](classifier::GestureState):
//!
//! ```text
//! HandFrame ── extract() ──▶ FrameFeatures ── process() ──▶ FrameOutput
//! ```
//!
//! [`GestureClassifier::process`](classifier::GestureClassifier::process)
//! is the whole per-frame contract: it takes `Option<&HandFrame>` ("no
//! hand" frames are defined no-ops, not errors) and returns at most one
//! discrete [`GestureEvent`](classifier::GestureEvent) plus the cursor
//! position whenever a hand is present.  The classifier performs no I/O
//! and never blocks; acting on the returned values is the driver's job.

pub mod classifier;
pub mod config;
pub mod features;
pub mod smooth;

pub use classifier::{
    ActiveGesture, CursorPos, FrameOutput, GestureClassifier, GestureEvent, GestureState,
};
pub use config::ClassifierConfig;
pub use features::{extract, FrameFeatures};
pub use smooth::CursorSmoother;
