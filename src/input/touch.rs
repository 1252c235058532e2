//! Touch contact tracking and two-finger gesture classification.
//!
//! The tracker owns the identifier → last-known-position map. Map
//! cardinality is the authoritative count of active contacts; when two or
//! more are down, each move event is classified as pinch, pan, or neither
//! from the per-finger motion alignments.

use std::collections::BTreeMap;

use glam::Vec2;

use super::event::TouchPoint;

/// Minimum |dot(axis, motion direction)| for a finger to count as aligned
/// with the pinch or pan axis. Fixed behavioral constant; changing it
/// changes gesture feel.
const ALIGN_THRESHOLD: f32 = 0.5;

/// A classified two-finger gesture for one move event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Fingers converged/diverged along the axis connecting them.
    Pinch {
        /// Change in finger separation in pixels (negative = closing).
        distance_delta: f32,
    },
    /// Fingers moved together in the same direction.
    Pan {
        /// Averaged motion vector with the vertical component sign-flipped
        /// (pixel-space Y is inverted relative to the camera's pan
        /// convention).
        delta: Vec2,
    },
}

/// Tracks active touch contacts by identifier.
///
/// A `BTreeMap` keeps identifiers ordered so the "first two" contacts
/// used for classification are deterministically the two lowest ids.
pub(crate) struct TouchTracker {
    touches: BTreeMap<u64, Vec2>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self {
            touches: BTreeMap::new(),
        }
    }

    /// Number of active contacts; routes single- vs. multi-touch logic.
    pub fn active_count(&self) -> usize {
        self.touches.len()
    }

    /// Last known position of a contact, if tracked.
    pub fn position(&self, id: u64) -> Option<Vec2> {
        self.touches.get(&id).copied()
    }

    /// Begin tracking a contact.
    pub fn start(&mut self, point: TouchPoint) {
        let _ = self.touches.insert(point.id, point.position);
    }

    /// Stop tracking a contact. Unknown identifiers are a no-op.
    pub fn end(&mut self, id: u64) {
        let _ = self.touches.remove(&id);
    }

    /// Record the new positions of all changed contacts.
    ///
    /// Always called after classification so the next event's "old"
    /// positions are current, regardless of classification outcome.
    pub fn record(&mut self, changed: &[TouchPoint]) {
        for point in changed {
            let _ = self.touches.insert(point.id, point.position);
        }
    }

    /// Classify one multi-touch move event as pinch, pan, or neither.
    ///
    /// Runs on the two lowest tracked identifiers. `changed` carries the
    /// new positions; contacts absent from it are treated as unmoved.
    /// Ambiguous motion (neither alignment test passes) yields `None` —
    /// silently dropped rather than guessed at.
    pub fn classify(&self, changed: &[TouchPoint]) -> Option<Gesture> {
        let (id0, id1) = self.primary_pair()?;
        let old0 = self.position(id0)?;
        let old1 = self.position(id1)?;
        let new0 = moved_position(changed, id0).unwrap_or(old0);
        let new1 = moved_position(changed, id1).unwrap_or(old1);

        let motion0 = new0 - old0;
        let motion1 = new1 - old1;
        let dir0 = motion0.normalize_or_zero();
        let dir1 = motion1.normalize_or_zero();

        // Reference axes: line between old positions, and averaged motion
        let pinch_axis = (old1 - old0).normalize_or_zero();
        let pan_axis = motion0.lerp(motion1, 0.5).normalize_or_zero();

        let pinch0 = pinch_axis.dot(dir0);
        let pinch1 = pinch_axis.dot(dir1);
        if pinch0.abs() > ALIGN_THRESHOLD
            && pinch1.abs() > ALIGN_THRESHOLD
            && (pinch0 > 0.0) != (pinch1 > 0.0)
        {
            return Some(Gesture::Pinch {
                distance_delta: new0.distance(new1) - old0.distance(old1),
            });
        }

        let pan0 = pan_axis.dot(dir0);
        let pan1 = pan_axis.dot(dir1);
        if pan0.abs() > ALIGN_THRESHOLD
            && pan1.abs() > ALIGN_THRESHOLD
            && (pan0 > 0.0) == (pan1 > 0.0)
        {
            let motion = motion0.lerp(motion1, 0.5);
            return Some(Gesture::Pan {
                delta: Vec2::new(motion.x, -motion.y),
            });
        }

        None
    }

    /// The two lowest active identifiers, if at least two are tracked.
    fn primary_pair(&self) -> Option<(u64, u64)> {
        let mut ids = self.touches.keys().copied();
        let first = ids.next()?;
        let second = ids.next()?;
        Some((first, second))
    }
}

/// New position of `id` within a changed-contact list, if present.
fn moved_position(changed: &[TouchPoint], id: u64) -> Option<Vec2> {
    changed
        .iter()
        .find(|point| point.id == id)
        .map(|point| point.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(points: &[TouchPoint]) -> TouchTracker {
        let mut tracker = TouchTracker::new();
        for point in points {
            tracker.start(*point);
        }
        tracker
    }

    #[test]
    fn converging_fingers_classify_as_pinch() {
        let tracker = tracker_with(&[
            TouchPoint::new(0, 0.0, 100.0),
            TouchPoint::new(1, 100.0, 100.0),
        ]);
        let gesture = tracker.classify(&[
            TouchPoint::new(0, 10.0, 100.0),
            TouchPoint::new(1, 90.0, 100.0),
        ]);
        // Each finger moved 10px closer: separation shrank 100 → 80
        assert_eq!(
            gesture,
            Some(Gesture::Pinch {
                distance_delta: -20.0
            })
        );
    }

    #[test]
    fn diverging_fingers_pinch_with_positive_delta() {
        let tracker = tracker_with(&[
            TouchPoint::new(3, 40.0, 50.0),
            TouchPoint::new(7, 60.0, 50.0),
        ]);
        let gesture = tracker.classify(&[
            TouchPoint::new(3, 30.0, 50.0),
            TouchPoint::new(7, 70.0, 50.0),
        ]);
        assert_eq!(
            gesture,
            Some(Gesture::Pinch {
                distance_delta: 20.0
            })
        );
    }

    #[test]
    fn co_directional_fingers_classify_as_pan() {
        let tracker = tracker_with(&[
            TouchPoint::new(0, 0.0, 100.0),
            TouchPoint::new(1, 100.0, 100.0),
        ]);
        let gesture = tracker.classify(&[
            TouchPoint::new(0, 5.0, 105.0),
            TouchPoint::new(1, 105.0, 105.0),
        ]);
        // Y component is sign-flipped on emission
        assert_eq!(
            gesture,
            Some(Gesture::Pan {
                delta: Vec2::new(5.0, -5.0)
            })
        );
    }

    #[test]
    fn twist_motion_is_ambiguous() {
        // Fingers move in opposite directions perpendicular to the
        // connecting axis (a twist): fails both alignment tests, so no
        // gesture fires for this event.
        let tracker = tracker_with(&[
            TouchPoint::new(0, 0.0, 0.0),
            TouchPoint::new(1, 100.0, 0.0),
        ]);
        let gesture = tracker.classify(&[
            TouchPoint::new(0, 0.0, 10.0),
            TouchPoint::new(1, 100.0, -10.0),
        ]);
        assert_eq!(gesture, None);
    }

    #[test]
    fn stationary_fingers_produce_no_gesture() {
        let tracker = tracker_with(&[
            TouchPoint::new(0, 0.0, 0.0),
            TouchPoint::new(1, 100.0, 0.0),
        ]);
        assert_eq!(tracker.classify(&[]), None);
    }

    #[test]
    fn classification_uses_two_lowest_identifiers() {
        // Third finger (higher id) moving wildly must not affect the
        // pinch between the two lowest ids.
        let tracker = tracker_with(&[
            TouchPoint::new(2, 0.0, 0.0),
            TouchPoint::new(5, 100.0, 0.0),
            TouchPoint::new(9, 500.0, 500.0),
        ]);
        let gesture = tracker.classify(&[
            TouchPoint::new(2, 10.0, 0.0),
            TouchPoint::new(5, 90.0, 0.0),
            TouchPoint::new(9, 0.0, 0.0),
        ]);
        assert!(matches!(gesture, Some(Gesture::Pinch { .. })));
    }

    #[test]
    fn end_is_idempotent_for_unknown_ids() {
        let mut tracker = tracker_with(&[TouchPoint::new(1, 0.0, 0.0)]);
        tracker.end(42);
        tracker.end(42);
        assert_eq!(tracker.active_count(), 1);
        tracker.end(1);
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn record_updates_old_positions() {
        let mut tracker = tracker_with(&[
            TouchPoint::new(0, 0.0, 0.0),
            TouchPoint::new(1, 100.0, 0.0),
        ]);
        tracker.record(&[TouchPoint::new(0, 10.0, 0.0)]);
        assert_eq!(tracker.position(0), Some(Vec2::new(10.0, 0.0)));
        assert_eq!(tracker.position(1), Some(Vec2::new(100.0, 0.0)));
    }
}
