//! Converts queued raw input events into gesture callbacks.
//!
//! The [`GestureController`] owns all transient input state (the touch
//! map and last mouse position) and an unbounded FIFO of pending events.
//! Raw event delivery only enqueues; classification and callback dispatch
//! happen exclusively inside [`process_events`](GestureController::process_events),
//! invoked once per render/update tick by the caller. This keeps camera
//! mutation at a single well-defined point per frame instead of inside
//! arbitrary input callbacks.

use std::collections::VecDeque;

use glam::Vec2;

use super::event::{InputEvent, TouchPoint};
use super::touch::{Gesture, TouchTracker};

/// Receiver for classified gesture output.
///
/// Every method has a no-op default body, so implementors opt into only
/// the gestures they care about; an unimplemented handler means "ignore
/// that gesture". [`ArcballCamera`](crate::camera::ArcballCamera)
/// implements this trait, wiring rotate/zoom/pan/pinch to the matching
/// camera operations.
pub trait GestureHandler {
    /// Single-pointer drag: previous and current pixel positions.
    fn on_rotate(&mut self, prev: Vec2, cur: Vec2) {
        let _ = (prev, cur);
    }

    /// Zoom request (positive = toward the viewer).
    fn on_zoom(&mut self, amount: f32) {
        let _ = amount;
    }

    /// Two-finger pan: averaged motion vector, Y already flipped to the
    /// camera's pan convention.
    fn on_pan(&mut self, delta: Vec2) {
        let _ = delta;
    }

    /// Two-finger pinch: change in finger separation in pixels
    /// (negative = fingers closing).
    fn on_pinch(&mut self, distance_delta: f32) {
        let _ = distance_delta;
    }

    /// Primary button press or first touch contact at a pixel position.
    fn on_press(&mut self, pos: Vec2) {
        let _ = pos;
    }
}

/// Queues raw pointer/touch events and dispatches classified gestures.
///
/// # Usage
///
/// ```ignore
/// // In the surface's event callbacks (any time):
/// controller.push_event(InputEvent::MouseMove { x, y });
///
/// // Once per tick, on the update thread:
/// controller.process_events(&mut camera);
/// ```
pub struct GestureController {
    /// Pending raw events, drained exactly once per processing pass.
    queue: VecDeque<InputEvent>,
    /// Active touch contacts.
    touches: TouchTracker,
    /// Last single-pointer position; `None` until the first pointer event.
    prev_mouse: Option<Vec2>,
}

impl GestureController {
    /// Create a controller with no pending events or tracked contacts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            touches: TouchTracker::new(),
            prev_mouse: None,
        }
    }

    /// Append a raw event to the pending queue.
    ///
    /// Safe to call from event-delivery callbacks; nothing is classified
    /// or dispatched until the next [`process_events`](Self::process_events).
    pub fn push_event(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Number of events waiting to be processed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of currently active touch contacts.
    #[must_use]
    pub fn active_touches(&self) -> usize {
        self.touches.active_count()
    }

    /// Drain the queue in arrival order, dispatching each event to
    /// `handler`. Every enqueued event is processed exactly once.
    pub fn process_events<H: GestureHandler>(&mut self, handler: &mut H) {
        while let Some(event) = self.queue.pop_front() {
            self.dispatch(event, handler);
        }
    }

    fn dispatch<H: GestureHandler>(
        &mut self,
        event: InputEvent,
        handler: &mut H,
    ) {
        match event {
            InputEvent::MouseMove { x, y } => {
                let cur = Vec2::new(x, y);
                // First event only primes the position; a rotation from
                // an arbitrary starting point would jump.
                if let Some(prev) = self.prev_mouse {
                    handler.on_rotate(prev, cur);
                }
                self.prev_mouse = Some(cur);
            }
            InputEvent::MouseDown { x, y } => {
                let pos = Vec2::new(x, y);
                self.prev_mouse = Some(pos);
                handler.on_press(pos);
            }
            // Negated so scroll-down zooms in ("pull toward viewer")
            InputEvent::Wheel { delta } => handler.on_zoom(-delta),
            InputEvent::TouchStart { changed } => {
                for point in &changed {
                    self.touches.start(*point);
                }
                if self.touches.active_count() == 1 {
                    if let [point] = changed.as_slice() {
                        handler.on_press(point.position);
                    }
                }
            }
            InputEvent::TouchMove { changed } => {
                self.handle_touch_move(&changed, handler);
            }
            InputEvent::TouchEnd { changed }
            | InputEvent::TouchCancel { changed } => {
                for point in &changed {
                    self.touches.end(point.id);
                }
            }
        }
    }

    /// Route a touch-move by active contact count: one contact rotates,
    /// two or more run pinch/pan classification on the primary pair.
    fn handle_touch_move<H: GestureHandler>(
        &mut self,
        changed: &[TouchPoint],
        handler: &mut H,
    ) {
        if self.touches.active_count() >= 2 {
            match self.touches.classify(changed) {
                Some(Gesture::Pinch { distance_delta }) => {
                    log::trace!("pinch: separation delta {distance_delta}");
                    handler.on_pinch(distance_delta);
                }
                Some(Gesture::Pan { delta }) => {
                    log::trace!("pan: delta {delta}");
                    handler.on_pan(delta);
                }
                None => {
                    log::trace!("ambiguous two-finger motion dropped");
                }
            }
        } else if let [point] = changed {
            if let Some(old) = self.touches.position(point.id) {
                handler.on_rotate(old, point.position);
            }
        }
        // New positions become the next event's "old" positions whether
        // or not a gesture fired.
        self.touches.record(changed);
    }
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new()
    }
}
