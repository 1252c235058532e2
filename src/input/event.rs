//! Platform-agnostic input events.
//!
//! These are enqueued on a [`GestureController`](super::GestureController)
//! as they arrive from the host surface and drained in arrival order once
//! per tick by `process_events`.

use glam::Vec2;

/// A raw pointer/touch event in surface pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved to an absolute surface position.
    MouseMove {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Primary pointer button pressed at a surface position.
    MouseDown {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Scroll wheel (positive = scroll down, DOM convention).
    Wheel {
        /// Raw scroll amount in pixels.
        delta: f32,
    },
    /// One or more touch contacts began.
    TouchStart {
        /// The contacts that changed in this event.
        changed: Vec<TouchPoint>,
    },
    /// One or more tracked contacts moved.
    TouchMove {
        /// The contacts that changed in this event.
        changed: Vec<TouchPoint>,
    },
    /// One or more contacts lifted.
    TouchEnd {
        /// The contacts that changed in this event.
        changed: Vec<TouchPoint>,
    },
    /// One or more contacts were cancelled by the host.
    TouchCancel {
        /// The contacts that changed in this event.
        changed: Vec<TouchPoint>,
    },
}

/// A single touch contact: stable identifier plus pixel position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Identifier unique per active contact, stable across its lifetime.
    pub id: u64,
    /// Last reported position in physical pixels.
    pub position: Vec2,
}

impl TouchPoint {
    /// Convenience constructor.
    #[must_use]
    pub fn new(id: u64, x: f32, y: f32) -> Self {
        Self {
            id,
            position: Vec2::new(x, y),
        }
    }
}
