// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Navigation core for guided camera tours over a 3D city scene.
//!
//! A viewer orbits freely and is flown between named vantage points
//! (districts and pages). This crate owns the parts in between the asset
//! pipeline and the UI: the viewpoint catalogue, the camera flight engine,
//! the envelope that keeps the camera in bounds, and the fog that follows
//! the viewer.
//!
//! # Key entry points
//!
//! - [`tour::TourController`] - resolves requests and runs the frame loop
//! - [`viewpoint::ViewpointStore`] - loads and resolves marker records
//! - [`animation::TransitionEngine`] - eased, supersedable camera flights
//! - [`camera::Envelope`] and [`camera::FogModel`] - per-frame spatial rules
//! - [`options::Options`] - static configuration with TOML presets
//!
//! # Frame loop
//!
//! Everything runs on the render loop's thread. Each frame the controller
//! advances the active flight (or reads the orbit controls when the user
//! holds the camera), constrains the result, computes fog, and hands both
//! to the [`tour::SceneRenderer`]. Rendering, orbit input and UI are host
//! collaborators behind the traits in [`tour::interfaces`].

pub mod animation;
pub mod camera;
pub mod error;
pub mod options;
pub mod tour;
pub mod util;
pub mod viewpoint;
