//! Input handling: raw event types, touch tracking, gesture
//! classification, and the queue-and-drain controller that turns them
//! into camera deltas.

/// Platform-agnostic input events.
pub mod event;
/// Queue-and-drain controller and the gesture output trait.
pub mod processor;
/// Touch contact map and two-finger gesture classification.
pub(crate) mod touch;
/// Winit window-event adapter.
#[cfg(feature = "viewer")]
pub mod viewer;

pub use event::{InputEvent, TouchPoint};
pub use processor::{GestureController, GestureHandler};
pub use touch::Gesture;
