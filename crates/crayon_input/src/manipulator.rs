//! Camera manipulators
//!
//! A manipulator owns camera state, consumes input snapshots and produces the
//! [`CameraFrame`] the renderer draws from.

use crate::{InputSnapshot, PointerButtons};
use crayon_math::{CameraFrame, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Something that can position the camera from user input
pub trait CameraManipulator {
    /// Current eye position and look-at basis
    fn compute_frame(&self) -> CameraFrame;

    /// Apply one frame of input
    fn handle_input(&mut self, input: &InputSnapshot);

    /// Apply time-based motion (held keys)
    fn advance_by_timestep(&mut self, dt: f32);
}

/// Tunables for [`TurntableManipulator`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurntableSettings {
    /// Radians per pixel of right-drag
    pub rotate_speed: f32,
    /// Distance scale factor per second of held zoom key
    pub zoom_rate: f32,
    /// Gap kept between the pitch and the poles
    pub pitch_margin: f32,
}

impl Default for TurntableSettings {
    fn default() -> Self {
        Self {
            rotate_speed: 0.01,
            zoom_rate: 1.5,
            pitch_margin: 0.2,
        }
    }
}

/// Orbits a center point at a fixed distance, with +Y always up
#[derive(Clone, Debug)]
pub struct TurntableManipulator {
    distance: f32,
    around: f32,
    up: f32,
    center: Vec3,
    zoom_in: bool,
    zoom_out: bool,
    pub settings: TurntableSettings,
}

impl Default for TurntableManipulator {
    fn default() -> Self {
        Self::new()
    }
}

impl TurntableManipulator {
    /// Ten units out on +Z, looking at the origin
    pub fn new() -> Self {
        Self::with_settings(TurntableSettings::default())
    }

    pub fn with_settings(settings: TurntableSettings) -> Self {
        Self {
            distance: 10.0,
            around: FRAC_PI_2,
            up: 0.0,
            center: Vec3::ZERO,
            zoom_in: false,
            zoom_out: false,
            settings,
        }
    }

    /// Builder: set the orbit distance
    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    /// Rotate by the given angles, clamping pitch away from the poles
    pub fn bump(&mut self, d_around: f32, d_up: f32) {
        let limit = FRAC_PI_2 - self.settings.pitch_margin;
        self.around += d_around;
        self.up = (self.up + d_up).clamp(-limit, limit);
    }

    pub fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Yaw around the vertical axis
    pub fn around(&self) -> f32 {
        self.around
    }

    /// Pitch above the horizontal plane
    pub fn up(&self) -> f32 {
        self.up
    }
}

impl CameraManipulator for TurntableManipulator {
    fn compute_frame(&self) -> CameraFrame {
        let (sin_around, cos_around) = self.around.sin_cos();
        let (sin_up, cos_up) = self.up.sin_cos();
        let offset = Vec3::new(cos_around * cos_up, sin_up, sin_around * cos_up);
        let eye = self.center + offset * self.distance;
        CameraFrame::look_at(eye, self.center, Vec3::Y)
    }

    fn handle_input(&mut self, input: &InputSnapshot) {
        if input.buttons.contains(PointerButtons::SECONDARY) {
            let speed = self.settings.rotate_speed;
            self.bump(input.pointer_delta.x * speed, input.pointer_delta.y * speed);
        }
        self.zoom_in = input.zoom_in;
        self.zoom_out = input.zoom_out;
    }

    fn advance_by_timestep(&mut self, dt: f32) {
        let factor = self.settings.zoom_rate.powf(dt);
        if self.zoom_in {
            self.distance /= factor;
        }
        if self.zoom_out {
            self.distance *= factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crayon_math::Vec2;

    const EPSILON: f32 = 0.0001;

    fn drag(dx: f32, dy: f32) -> InputSnapshot {
        InputSnapshot {
            pointer_delta: Vec2::new(dx, dy),
            buttons: PointerButtons::SECONDARY,
            ..Default::default()
        }
    }

    #[test]
    fn test_default_frame_looks_down_negative_z() {
        let frame = TurntableManipulator::new().compute_frame();
        assert!((frame.eye - Vec3::new(0.0, 0.0, 10.0)).length() < EPSILON);
        assert!((frame.forward - Vec3::new(0.0, 0.0, -1.0)).length() < EPSILON);
        assert!((frame.up - Vec3::Y).length() < EPSILON);
    }

    #[test]
    fn test_drag_requires_secondary_button() {
        let mut turntable = TurntableManipulator::new();
        let mut snap = drag(50.0, 0.0);
        snap.buttons = PointerButtons::PRIMARY;
        turntable.handle_input(&snap);
        assert_eq!(turntable.around(), FRAC_PI_2);

        turntable.handle_input(&drag(50.0, 10.0));
        assert!((turntable.around() - (FRAC_PI_2 + 0.5)).abs() < EPSILON);
        assert!((turntable.up() - 0.1).abs() < EPSILON);
    }

    #[test]
    fn test_pitch_is_clamped() {
        let mut turntable = TurntableManipulator::new();
        let limit = FRAC_PI_2 - 0.2;

        turntable.handle_input(&drag(0.0, 10_000.0));
        assert!((turntable.up() - limit).abs() < EPSILON);

        turntable.handle_input(&drag(0.0, -20_000.0));
        assert!((turntable.up() + limit).abs() < EPSILON);
    }

    #[test]
    fn test_zoom_follows_rate_per_second() {
        let mut turntable = TurntableManipulator::new();
        turntable.handle_input(&InputSnapshot { zoom_in: true, ..Default::default() });
        turntable.advance_by_timestep(1.0);
        assert!((turntable.distance() - 10.0 / 1.5).abs() < EPSILON);

        turntable.handle_input(&InputSnapshot { zoom_out: true, ..Default::default() });
        turntable.advance_by_timestep(2.0);
        assert!((turntable.distance() - 10.0 / 1.5 * 2.25).abs() < EPSILON);
    }

    #[test]
    fn test_no_zoom_without_keys() {
        let mut turntable = TurntableManipulator::new();
        turntable.advance_by_timestep(5.0);
        assert_eq!(turntable.distance(), 10.0);
    }

    #[test]
    fn test_frame_orbits_center() {
        let mut turntable = TurntableManipulator::new().with_distance(4.0);
        turntable.set_center(Vec3::new(1.0, 2.0, 0.0));
        turntable.bump(-FRAC_PI_2, 0.0);

        let frame = turntable.compute_frame();
        assert!((frame.eye - Vec3::new(5.0, 2.0, 0.0)).length() < EPSILON);
        assert!((frame.eye.distance(turntable.center()) - 4.0).abs() < EPSILON);
    }
}
