//! Shared utilities for the tour loop.
//!
//! Easing curves for transitions and frame pacing for the render loop.

pub mod easing;
pub mod frame_timing;
