//! 4x4 Matrix utilities for rendering
//!
//! Matrices are column-major (`m[column][row]`), matching WGSL's `mat4x4<f32>`
//! layout so they can be uploaded as-is.

use crate::{CameraFrame, Vec3};

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a point (w = 1) and apply the perspective divide
pub fn transform_point(m: Mat4, p: Vec3) -> Vec3 {
    let x = m[0][0] * p.x + m[1][0] * p.y + m[2][0] * p.z + m[3][0];
    let y = m[0][1] * p.x + m[1][1] * p.y + m[2][1] * p.z + m[3][1];
    let z = m[0][2] * p.x + m[1][2] * p.y + m[2][2] * p.z + m[3][2];
    let w = m[0][3] * p.x + m[1][3] * p.y + m[2][3] * p.z + m[3][3];
    if w != 0.0 && w != 1.0 {
        Vec3::new(x / w, y / w, z / w)
    } else {
        Vec3::new(x, y, z)
    }
}

/// Translation matrix
pub fn translation(t: Vec3) -> Mat4 {
    let mut m = IDENTITY;
    m[3][0] = t.x;
    m[3][1] = t.y;
    m[3][2] = t.z;
    m
}

/// Counter-clockwise rotation about the Z axis
pub fn rotation_z(angle: f32) -> Mat4 {
    let (sn, cs) = angle.sin_cos();
    let mut m = IDENTITY;
    m[0][0] = cs;
    m[0][1] = sn;
    m[1][0] = -sn;
    m[1][1] = cs;
    m
}

/// Right-handed perspective projection with a [0, 1] depth range
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let range = far / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, range, -1.0],
        [0.0, 0.0, range * near, 0.0],
    ]
}

/// World-to-view matrix for a camera frame
pub fn view(frame: &CameraFrame) -> Mat4 {
    let s = frame.right;
    let u = frame.up;
    let f = frame.forward;
    let eye = frame.eye;

    [
        [s.x, u.x, -f.x, 0.0],
        [s.y, u.y, -f.y, 0.0],
        [s.z, u.z, -f.z, 0.0],
        [-s.dot(eye), -u.dot(eye), f.dot(eye), 1.0],
    ]
}

/// Maps window pixels (origin top-left, y down) to clip space
pub fn pixel_orthographic(width: f32, height: f32) -> Mat4 {
    [
        [2.0 / width, 0.0, 0.0, 0.0],
        [0.0, -2.0 / height, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [-1.0, 1.0, 0.0, 1.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(transform_point(IDENTITY, v), v));
    }

    #[test]
    fn test_mul_applies_right_first() {
        let t = translation(Vec3::new(1.0, 0.0, 0.0));
        let r = rotation_z(std::f32::consts::FRAC_PI_2);
        // Rotate X onto Y, then translate by +X
        let m = mul(t, r);
        let p = transform_point(m, Vec3::X);
        assert!(vec_approx_eq(p, Vec3::new(1.0, 1.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_view_moves_eye_to_origin() {
        let frame = CameraFrame::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        let v = view(&frame);
        assert!(vec_approx_eq(transform_point(v, frame.eye), Vec3::ZERO));
        // The target sits straight ahead (-Z in view space)
        assert!(vec_approx_eq(transform_point(v, Vec3::ZERO), Vec3::new(0.0, 0.0, -10.0)));
    }

    #[test]
    fn test_perspective_depth_range() {
        let p = perspective(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 100.0);
        let near = transform_point(p, Vec3::new(0.0, 0.0, -0.1));
        let far = transform_point(p, Vec3::new(0.0, 0.0, -100.0));
        assert!(near.z.abs() < EPSILON);
        assert!((far.z - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_pixel_orthographic_corners() {
        let m = pixel_orthographic(960.0, 720.0);
        assert!(vec_approx_eq(transform_point(m, Vec3::ZERO), Vec3::new(-1.0, 1.0, 0.0)));
        assert!(vec_approx_eq(
            transform_point(m, Vec3::new(960.0, 720.0, 0.0)),
            Vec3::new(1.0, -1.0, 0.0)
        ));
    }
}
