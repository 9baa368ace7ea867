//! Camera transition engine.
//!
//! A [`TransitionSession`] interpolates the camera from its current pose to
//! a [`Placement`](crate::viewpoint::Placement): position and target by
//! eased lerp, orientation by eased slerp toward a look-at rotation. The
//! [`TransitionEngine`] holds at most one session and replaces it
//! silently when a new flight starts.

pub mod engine;
pub mod interpolation;
pub mod join;
pub mod session;

pub use engine::{Superseded, TransitionEngine, TransitionState};
pub use join::{CompletionJoin, JoinSlot};
pub use session::{CompletionHook, TickOutcome, TrackDurations, TransitionSession};
