//! Camera coordinate frame

use crate::Vec3;

/// Position and orientation of a viewer
///
/// The basis is right-handed: the camera looks along `forward`, with
/// `right` and `up` spanning the image plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFrame {
    pub eye: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl CameraFrame {
    /// Build a frame at `eye` looking at `target`
    ///
    /// Falls back to world +Z as the reference up when `world_up` is
    /// parallel to the view direction.
    pub fn look_at(eye: Vec3, target: Vec3, world_up: Vec3) -> Self {
        let forward = (target - eye).normalized();
        let mut right = forward.cross(world_up).normalized();
        if right == Vec3::ZERO {
            right = forward.cross(Vec3::Z).normalized();
        }
        let up = right.cross(forward);
        Self {
            eye,
            forward,
            right,
            up,
        }
    }
}

impl Default for CameraFrame {
    fn default() -> Self {
        Self::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 0.0001
    }

    #[test]
    fn test_look_down_negative_z() {
        let frame = CameraFrame::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        assert!(approx(frame.forward, Vec3::new(0.0, 0.0, -1.0)));
        assert!(approx(frame.right, Vec3::X));
        assert!(approx(frame.up, Vec3::Y));
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let frame = CameraFrame::look_at(Vec3::new(3.0, 4.0, 5.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert!(frame.forward.dot(frame.right).abs() < 0.0001);
        assert!(frame.forward.dot(frame.up).abs() < 0.0001);
        assert!(frame.right.dot(frame.up).abs() < 0.0001);
        assert!((frame.up.length() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_degenerate_up_does_not_collapse() {
        let frame = CameraFrame::look_at(Vec3::new(0.0, 10.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert!((frame.right.length() - 1.0).abs() < 0.0001);
    }
}
