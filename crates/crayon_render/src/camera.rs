//! Perspective camera
//!
//! Wraps a [`CameraFrame`] from the manipulator with lens parameters. The
//! same lens is used to build the projection matrix and to cast rays through
//! pixels, so sketched points land under the cursor.

use crayon_core::{RayCaster, Viewport};
use crayon_math::{mat4, CameraFrame, Mat4, Ray};

/// Eye frame plus lens
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub frame: CameraFrame,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            frame: CameraFrame::default(),
            fov: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn new(fov: f32, near: f32, far: f32) -> Self {
        Self {
            frame: CameraFrame::default(),
            fov,
            near,
            far,
        }
    }

    /// Builder: set the eye frame
    pub fn with_frame(mut self, frame: CameraFrame) -> Self {
        self.frame = frame;
        self
    }

    pub fn view_matrix(&self) -> Mat4 {
        mat4::view(&self.frame)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov.to_radians(), aspect, self.near, self.far)
    }

    /// Projection applied after view
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        mat4::mul(self.projection_matrix(aspect), self.view_matrix())
    }
}

impl RayCaster for Camera {
    fn world_ray(&self, x: f32, y: f32, viewport: Viewport) -> Ray {
        let (ndc_x, ndc_y) = if viewport.width > 0.0 && viewport.height > 0.0 {
            (2.0 * x / viewport.width - 1.0, 1.0 - 2.0 * y / viewport.height)
        } else {
            (0.0, 0.0)
        };

        let tan_half = (self.fov.to_radians() / 2.0).tan();
        let f = &self.frame;
        let direction = f.forward
            + f.right * (ndc_x * tan_half * viewport.aspect())
            + f.up * (ndc_y * tan_half);
        Ray::new(f.eye, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crayon_math::Vec3;

    const EPSILON: f32 = 0.001;
    const VIEWPORT: Viewport = Viewport { width: 960.0, height: 720.0 };

    #[test]
    fn test_center_pixel_looks_forward() {
        let camera = Camera::default();
        let ray = camera.world_ray(480.0, 360.0, VIEWPORT);
        assert!((ray.origin - Vec3::new(0.0, 0.0, 10.0)).length() < EPSILON);
        assert!((ray.direction - Vec3::new(0.0, 0.0, -1.0)).length() < EPSILON);
    }

    #[test]
    fn test_ray_reprojects_to_same_pixel() {
        let camera = Camera::default();
        let aspect = VIEWPORT.aspect();
        let vp = camera.view_projection(aspect);

        for (px, py) in [(100.0, 80.0), (900.0, 700.0), (480.0, 10.0)] {
            let ray = camera.world_ray(px, py, VIEWPORT);
            let clip = mat4::transform_point(vp, ray.at(5.0));
            let sx = (clip.x + 1.0) / 2.0 * VIEWPORT.width;
            let sy = (1.0 - clip.y) / 2.0 * VIEWPORT.height;
            assert!((sx - px).abs() < 0.1, "x {} vs {}", sx, px);
            assert!((sy - py).abs() < 0.1, "y {} vs {}", sy, py);
        }
    }

    #[test]
    fn test_top_of_screen_points_up() {
        let camera = Camera::default();
        let ray = camera.world_ray(480.0, 0.0, VIEWPORT);
        assert!(ray.direction.y > 0.0);
        assert!(ray.direction.x.abs() < EPSILON);
    }
}
