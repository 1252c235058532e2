//! Arcball camera: orbit, zoom, and pan with a numerically stable view
//! matrix.
//!
//! The camera orbits a pivot point. Orientation is a unit quaternion,
//! zoom is a translation along view-space −Z (clamped so the eye never
//! crosses the pivot), and panning moves the pivot itself. The composed
//! view matrix and its inverse are re-derived after every mutation, so
//! readers never observe stale state.

use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

use crate::input::GestureHandler;
use crate::options::CameraOptions;

/// Closest the zoom translation may bring the eye to the pivot, in
/// camera-space units. Keeps the translation strictly on the −Z side so
/// the view never inverts through the pivot.
const MIN_ZOOM_DEPTH: f32 = -0.2;

/// Arcball camera maintaining a world-to-view matrix and its inverse.
///
/// Construct with [`ArcballCamera::new`] or
/// [`ArcballCamera::from_options`], feed it pixel-space deltas from a
/// gesture source, and read back [`view_matrix`](Self::view_matrix) /
/// [`eye_pos`](Self::eye_pos) for rendering.
///
/// Degenerate construction input is the caller's responsibility: `eye`
/// must differ from `center`, and `up` must not be parallel to the view
/// direction, otherwise NaN propagates through normalization.
pub struct ArcballCamera {
    /// Current orbit orientation about the pivot (always unit length).
    rotation: Quat,
    /// Pure −Z offset encoding the zoom distance from the pivot.
    translation: Mat4,
    /// Inverse translation to the (possibly panned) pivot position.
    center_translation: Mat4,
    /// Derived world-to-view matrix; recomputed after every mutation.
    camera: Mat4,
    /// Inverse of `camera`; used to read back eye position/orientation.
    inv_camera: Mat4,
    /// Zoom sensitivity multiplier.
    zoom_speed: f32,
    /// Reciprocal surface dimensions, for normalizing pixel deltas.
    inv_screen: Vec2,
}

impl ArcballCamera {
    /// Create a camera looking from `eye` toward `center` with the given
    /// `up` hint, zoom sensitivity, and input-surface pixel dimensions.
    #[must_use]
    pub fn new(
        eye: Vec3,
        center: Vec3,
        up: Vec3,
        zoom_speed: f32,
        width: f32,
        height: f32,
    ) -> Self {
        let to_center = center - eye;
        let forward = to_center.normalize();
        let right = forward.cross(up.normalize()).normalize();
        let true_up = right.cross(forward).normalize();
        // Re-orthogonalize in case the up hint was not perpendicular
        let right = forward.cross(true_up).normalize();

        // View rotation rows are the camera basis; looks down −Z
        let basis = Mat3::from_cols(right, true_up, -forward).transpose();

        let mut camera = Self {
            rotation: Quat::from_mat3(&basis).normalize(),
            translation: Mat4::from_translation(Vec3::new(
                0.0,
                0.0,
                -to_center.length(),
            )),
            center_translation: Mat4::from_translation(center).inverse(),
            camera: Mat4::IDENTITY,
            inv_camera: Mat4::IDENTITY,
            zoom_speed,
            inv_screen: Vec2::new(1.0 / width, 1.0 / height),
        };
        camera.update_camera_matrix();
        camera
    }

    /// Create a camera from [`CameraOptions`] plus the surface dimensions.
    #[must_use]
    pub fn from_options(
        options: &CameraOptions,
        width: f32,
        height: f32,
    ) -> Self {
        Self::new(
            Vec3::from(options.eye),
            Vec3::from(options.center),
            Vec3::from(options.up),
            options.zoom_speed,
            width,
            height,
        )
    }

    /// Orbit the camera from the previous to the current pointer position
    /// (pixel coordinates).
    ///
    /// Both positions are projected onto a virtual arcball and the
    /// resulting rotation is composed in view space, so successive small
    /// drags accumulate correctly regardless of current orientation.
    pub fn rotate(&mut self, prev_mouse: Vec2, cur_mouse: Vec2) {
        let prev_ball = screen_to_arcball(self.screen_to_ndc(prev_mouse));
        let cur_ball = screen_to_arcball(self.screen_to_ndc(cur_mouse));

        // Incremental rotation applied in view space, not world space.
        // Renormalize to keep the unit-length invariant over long drags.
        self.rotation = (cur_ball * prev_ball * self.rotation).normalize();
        self.update_camera_matrix();
    }

    /// Zoom by `amount` (positive moves the eye toward the pivot).
    ///
    /// The translation is clamped so its depth component never comes
    /// nearer than a fixed threshold to the pivot; overshooting is
    /// silently corrected rather than reported.
    pub fn zoom(&mut self, amount: f32) {
        let motion =
            Vec3::new(0.0, 0.0, amount * self.inv_screen.y * self.zoom_speed);
        self.translation = Mat4::from_translation(motion) * self.translation;
        if self.translation.w_axis.z > MIN_ZOOM_DEPTH {
            self.translation.w_axis.z = MIN_ZOOM_DEPTH;
        }
        self.update_camera_matrix();
    }

    /// Pan the pivot by a pixel-space delta (`+y` is up in the camera's
    /// pan convention).
    ///
    /// The delta is scaled by the current zoom distance so pan speed is
    /// distance-independent in screen terms, then carried into world
    /// space through the inverse view matrix. Pan moves the pivot, not
    /// the eye directly.
    pub fn pan(&mut self, mouse_delta: Vec2) {
        let zoom_dist = self.translation.w_axis.z.abs();
        let delta = Vec4::new(
            mouse_delta.x * self.inv_screen.x,
            mouse_delta.y * self.inv_screen.y,
            0.0,
            0.0,
        ) * zoom_dist;

        // Directions are unaffected by the pivot translation, so this is
        // exactly invertible by the negated delta.
        let motion = self.inv_camera * delta;
        self.center_translation = Mat4::from_translation(motion.truncate())
            * self.center_translation;
        self.update_camera_matrix();
    }

    /// Refresh the stored reciprocal surface dimensions after a resize.
    pub fn update_screen(&mut self, width: f32, height: f32) {
        self.inv_screen = Vec2::new(1.0 / width, 1.0 / height);
    }

    /// World-to-view matrix, current as of the last mutation.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera
    }

    /// Inverse of the view matrix.
    #[must_use]
    pub fn inv_view_matrix(&self) -> Mat4 {
        self.inv_camera
    }

    /// Eye position in world space.
    #[must_use]
    pub fn eye_pos(&self) -> Vec3 {
        self.inv_camera.w_axis.truncate()
    }

    /// Unit vector from the eye toward the pivot.
    #[must_use]
    pub fn eye_dir(&self) -> Vec3 {
        (self.inv_camera * Vec4::new(0.0, 0.0, -1.0, 0.0))
            .truncate()
            .normalize()
    }

    /// Camera up direction in world space (unit length).
    #[must_use]
    pub fn up_dir(&self) -> Vec3 {
        (self.inv_camera * Vec4::new(0.0, 1.0, 0.0, 0.0))
            .truncate()
            .normalize()
    }

    /// Map a pixel position into clamped normalized device coordinates
    /// in [−1, 1]², with +y up.
    fn screen_to_ndc(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x * 2.0 * self.inv_screen.x - 1.0,
            1.0 - 2.0 * p.y * self.inv_screen.y,
        )
        .clamp(Vec2::splat(-1.0), Vec2::splat(1.0))
    }

    /// Recompute `camera = translation · rotation · center_translation`
    /// and its inverse. Called after every state mutation.
    fn update_camera_matrix(&mut self) {
        self.camera = self.translation
            * Mat4::from_quat(self.rotation)
            * self.center_translation;
        self.inv_camera = self.camera.inverse();
    }
}

impl GestureHandler for ArcballCamera {
    fn on_rotate(&mut self, prev: Vec2, cur: Vec2) {
        self.rotate(prev, cur);
    }

    fn on_zoom(&mut self, amount: f32) {
        self.zoom(amount);
    }

    fn on_pan(&mut self, delta: Vec2) {
        self.pan(delta);
    }

    fn on_pinch(&mut self, distance_delta: f32) {
        self.zoom(distance_delta);
    }
}

/// Project a normalized device coordinate onto the virtual arcball.
///
/// Points inside the unit disc land on the front hemisphere; points
/// outside are pulled to the equator (a singularity-avoiding mapping —
/// "falling off" the ball still yields a valid rotation axis). The two
/// branches agree at `|p| = 1`.
#[must_use]
pub fn screen_to_arcball(p: Vec2) -> Quat {
    let dist_sq = p.length_squared();
    if dist_sq <= 1.0 {
        Quat::from_xyzw(p.x, p.y, (1.0 - dist_sq).sqrt(), 0.0)
    } else {
        let unit = p.normalize();
        Quat::from_xyzw(unit.x, unit.y, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: f32 = 800.0;
    const HEIGHT: f32 = 600.0;

    fn test_camera() -> ArcballCamera {
        ArcballCamera::new(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::Y,
            1.0,
            WIDTH,
            HEIGHT,
        )
    }

    fn assert_vec3_near(a: Vec3, b: Vec3, tol: f32) {
        assert!(
            (a - b).length() < tol,
            "expected {b:?}, got {a:?} (tol {tol})"
        );
    }

    fn assert_identity_near(m: Mat4, tol: f32) {
        let diff = m - Mat4::IDENTITY;
        for col in [diff.x_axis, diff.y_axis, diff.z_axis, diff.w_axis] {
            assert!(col.length() < tol, "not identity: {m:?}");
        }
    }

    #[test]
    fn construction_looks_at_center() {
        let camera = test_camera();
        assert_vec3_near(camera.eye_pos(), Vec3::new(0.0, 0.0, 5.0), 1e-5);
        assert_vec3_near(camera.eye_dir(), Vec3::new(0.0, 0.0, -1.0), 1e-5);
        assert_vec3_near(camera.up_dir(), Vec3::Y, 1e-5);
    }

    #[test]
    fn construction_off_axis_basis() {
        let eye = Vec3::new(3.0, 4.0, 5.0);
        let center = Vec3::new(1.0, 0.0, -2.0);
        let camera =
            ArcballCamera::new(eye, center, Vec3::Y, 1.0, WIDTH, HEIGHT);
        assert_vec3_near(camera.eye_pos(), eye, 1e-4);
        assert_vec3_near(camera.eye_dir(), (center - eye).normalize(), 1e-4);
        // up stays perpendicular to the view direction
        assert!(camera.up_dir().dot(camera.eye_dir()).abs() < 1e-4);
    }

    #[test]
    fn rotation_stays_unit_length() {
        let mut camera = test_camera();
        let drags = [
            (Vec2::new(400.0, 300.0), Vec2::new(420.0, 310.0)),
            (Vec2::new(420.0, 310.0), Vec2::new(500.0, 250.0)),
            (Vec2::new(500.0, 250.0), Vec2::new(10.0, 590.0)),
            (Vec2::new(10.0, 590.0), Vec2::new(790.0, 10.0)),
            (Vec2::new(790.0, 10.0), Vec2::new(400.0, 300.0)),
        ];
        for _ in 0..200 {
            for (prev, cur) in drags {
                camera.rotate(prev, cur);
                assert!((camera.rotation.length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn camera_times_inverse_is_identity() {
        let mut camera = test_camera();
        camera.rotate(Vec2::new(400.0, 300.0), Vec2::new(520.0, 180.0));
        assert_identity_near(camera.camera * camera.inv_camera, 1e-5);
        camera.zoom(120.0);
        assert_identity_near(camera.camera * camera.inv_camera, 1e-5);
        camera.pan(Vec2::new(30.0, -45.0));
        assert_identity_near(camera.camera * camera.inv_camera, 1e-5);
    }

    #[test]
    fn zoom_clamps_at_minimum_depth() {
        let mut camera = test_camera();
        // Wildly overshooting zoom-in gets clamped, never crosses pivot
        for amount in [1e4, 1e5, -300.0, 1e6, 42.0, -1.0, 1e9] {
            camera.zoom(amount);
            assert!(camera.translation.w_axis.z <= MIN_ZOOM_DEPTH + 1e-6);
        }
        assert_eq!(camera.translation.w_axis.z, MIN_ZOOM_DEPTH);
    }

    #[test]
    fn zoom_moves_eye_toward_pivot() {
        let mut camera = test_camera();
        let before = camera.eye_pos().length();
        camera.zoom(300.0);
        assert!(camera.eye_pos().length() < before);
    }

    #[test]
    fn arcball_center_maps_to_pole() {
        let q = screen_to_arcball(Vec2::ZERO);
        assert_eq!(q.x, 0.0);
        assert_eq!(q.y, 0.0);
        assert_eq!(q.z, 1.0);
        assert_eq!(q.w, 0.0);
    }

    #[test]
    fn arcball_outside_ball_maps_to_equator() {
        let q = screen_to_arcball(Vec2::new(3.0, 4.0));
        assert!((q.x - 0.6).abs() < 1e-6);
        assert!((q.y - 0.8).abs() < 1e-6);
        assert_eq!(q.z, 0.0);
        assert_eq!(q.w, 0.0);
    }

    #[test]
    fn arcball_continuous_at_boundary() {
        let inside = screen_to_arcball(Vec2::new(1.0, 0.0));
        let outside = screen_to_arcball(Vec2::new(1.0 + 1e-6, 0.0));
        assert!((inside.x - outside.x).abs() < 1e-3);
        assert!(inside.z.abs() < 1e-3);
        assert_eq!(outside.z, 0.0);
    }

    #[test]
    fn pan_round_trip_restores_pivot() {
        let mut camera = test_camera();
        camera.rotate(Vec2::new(400.0, 300.0), Vec2::new(460.0, 330.0));
        let original = camera.center_translation;
        camera.pan(Vec2::new(37.0, -120.0));
        camera.pan(Vec2::new(-37.0, 120.0));
        let diff = camera.center_translation - original;
        for col in [diff.x_axis, diff.y_axis, diff.z_axis, diff.w_axis] {
            assert!(col.length() < 1e-5);
        }
    }

    #[test]
    fn pan_speed_scales_with_zoom_distance() {
        let mut near = test_camera();
        let mut far = test_camera();
        far.zoom(-3000.0); // zoom out
        let near_before = near.eye_pos();
        let far_before = far.eye_pos();
        near.pan(Vec2::new(100.0, 0.0));
        far.pan(Vec2::new(100.0, 0.0));
        let near_moved = (near.eye_pos() - near_before).length();
        let far_moved = (far.eye_pos() - far_before).length();
        assert!(far_moved > near_moved);
    }

    #[test]
    fn update_screen_rescales_pixel_deltas() {
        let mut camera = test_camera();
        camera.update_screen(2.0 * WIDTH, 2.0 * HEIGHT);
        // Same pixel amount now covers half the normalized distance
        camera.zoom(300.0);
        let dist_hidpi = camera.eye_pos().length();
        let mut reference = test_camera();
        reference.zoom(150.0);
        assert!((dist_hidpi - reference.eye_pos().length()).abs() < 1e-5);
    }

    #[test]
    fn gesture_handler_routes_to_camera_ops() {
        let mut camera = test_camera();
        let before = camera.eye_pos();
        camera.on_zoom(200.0);
        assert!((camera.eye_pos() - before).length() > 0.0);
        let rot_before = camera.rotation;
        camera.on_rotate(Vec2::new(400.0, 300.0), Vec2::new(430.0, 280.0));
        assert!(camera.rotation != rot_before);
    }
}
