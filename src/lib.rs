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
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math allowances
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::use_self)]
#![allow(clippy::redundant_pub_crate)]

//! Interactive 3D view control: arcball camera + gesture classification.
//!
//! Converts raw pointer/touch input into a camera transform (orbit, zoom,
//! pan) and disambiguates multi-touch gestures (pinch vs. two-finger
//! drag) from noisy per-finger motion.
//!
//! # Key entry points
//!
//! - [`camera::ArcballCamera`] - orbit/zoom/pan state and the composed
//!   view matrix plus its inverse
//! - [`input::GestureController`] - queue-and-drain event processing and
//!   pinch/pan classification
//! - [`input::GestureHandler`] - the capability set a gesture consumer
//!   opts into (the camera implements it)
//! - [`options::Options`] - construction-time configuration with TOML
//!   preset support
//!
//! # Architecture
//!
//! The two components are loosely coupled through plain vector values:
//! the controller never touches the camera type, it emits normalized
//! deltas through [`input::GestureHandler`]. Input delivery only enqueues
//! events; classification and camera mutation happen at one well-defined
//! point per frame, when the caller drains the queue with
//! [`input::GestureController::process_events`].
//!
//! ```
//! use arcview::camera::ArcballCamera;
//! use arcview::input::{GestureController, InputEvent};
//! use glam::Vec3;
//!
//! let mut camera = ArcballCamera::new(
//!     Vec3::new(0.0, 0.0, 5.0), // eye
//!     Vec3::ZERO,               // pivot
//!     Vec3::Y,                  // up hint
//!     1.0,                      // zoom speed
//!     800.0,
//!     600.0,
//! );
//! let mut controller = GestureController::new();
//!
//! // From the surface's event callbacks, at any time:
//! controller.push_event(InputEvent::Wheel { delta: -50.0 });
//!
//! // Once per tick, on the update thread:
//! controller.process_events(&mut camera);
//!
//! let view = camera.view_matrix();
//! let eye = camera.eye_pos();
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;

pub use camera::{screen_to_arcball, ArcballCamera};
pub use error::ArcviewError;
pub use input::{
    Gesture, GestureController, GestureHandler, InputEvent, TouchPoint,
};
pub use options::{CameraOptions, Options};
