//! # Introduction
//!
//! sortviz animates classic in-place sorting algorithms as a bar chart in the
//! terminal. Each algorithm runs as a suspendable state machine that performs
//! one swap, shift or placement per call; the event loop renders between calls
//! so every mutation is visible.
//!
//! ## Pipeline
//!
//! ```text
//! Config → ArrayModel → SortStepper::step → Highlights → render_frame
//! ```
//!
//! 1. [`config`] — surface size, array size, value range and tick rate.
//! 2. [`model`] — the working array and the bar metrics derived from it.
//! 3. [`sorts`] — insertion, bubble, selection and merge sort as
//!    [`sorts::SortStepper`]s.
//! 4. [`ui`] — ratatui rendering, session state and the keyboard-driven
//!    event loop.
//! 5. [`errors`] and [`logging`] — error types and opt-in tracing.
//!
//! ## Keys
//!
//! `R` reset, `SPACE` start, `A`/`D` ascending/descending,
//! `I`/`B`/`S`/`M` insertion/bubble/selection/merge, `Q` or `Esc` quit.

pub mod config;
pub mod errors;
pub mod logging;
pub mod model;
pub mod sorts;
pub mod ui;
