//! Tour orchestration.
//!
//! [`TourController`] turns district/page requests into camera flights and
//! runs the per-frame loop: advance the flight (or read orbit input),
//! constrain, fog, render. See [`interfaces`] for what it expects from the
//! host application.

pub mod controller;
pub mod interfaces;

pub use controller::{FrameReport, NavigationStarted, TourController, TourState};
pub use interfaces::{OrbitInput, SceneRenderer, ViewLayer};
