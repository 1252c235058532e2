//! Winit window-event adapter (feature `viewer`).
//!
//! Translates `winit` window events into [`InputEvent`]s ready for
//! [`GestureController::push_event`](super::GestureController::push_event).
//! Only translation happens here; queueing and classification stay with
//! the controller.

use glam::Vec2;
use winit::event::{
    ElementState, MouseButton, MouseScrollDelta, Touch, TouchPhase,
    WindowEvent,
};

use super::event::{InputEvent, TouchPoint};

/// Pixels represented by one line of wheel scroll.
const PIXELS_PER_LINE: f32 = 10.0;

/// Stateful winit adapter.
///
/// Winit reports button presses without a position, so the adapter keeps
/// the last cursor position to stamp onto `MouseDown` events.
pub struct WinitAdapter {
    last_cursor: Vec2,
}

impl WinitAdapter {
    /// Create an adapter with the cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_cursor: Vec2::ZERO,
        }
    }

    /// Translate a window event, if it is one this crate consumes.
    ///
    /// Wheel deltas are converted to the DOM convention carried by
    /// [`InputEvent::Wheel`] (positive = scroll down).
    pub fn convert(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let pos =
                    Vec2::new(position.x as f32, position.y as f32);
                self.last_cursor = pos;
                Some(InputEvent::MouseMove { x: pos.x, y: pos.y })
            }
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state: ElementState::Pressed,
                ..
            } => Some(InputEvent::MouseDown {
                x: self.last_cursor.x,
                y: self.last_cursor.y,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => {
                        -(*y) * PIXELS_PER_LINE
                    }
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                Some(InputEvent::Wheel { delta })
            }
            WindowEvent::Touch(Touch {
                phase,
                location,
                id,
                ..
            }) => {
                let changed = vec![TouchPoint::new(
                    *id,
                    location.x as f32,
                    location.y as f32,
                )];
                Some(match phase {
                    TouchPhase::Started => {
                        InputEvent::TouchStart { changed }
                    }
                    TouchPhase::Moved => InputEvent::TouchMove { changed },
                    TouchPhase::Ended => InputEvent::TouchEnd { changed },
                    TouchPhase::Cancelled => {
                        InputEvent::TouchCancel { changed }
                    }
                })
            }
            _ => None,
        }
    }
}

impl Default for WinitAdapter {
    fn default() -> Self {
        Self::new()
    }
}
