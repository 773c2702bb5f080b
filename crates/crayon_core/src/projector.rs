//! Screen-to-plane projection of sketch samples

use crayon_math::{Bounds3, Plane, Ray, Vec2, Vec3};

/// Window size in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Anything that can turn a pixel into a world-space ray
pub trait RayCaster {
    /// Ray from the eye through pixel (x, y), origin top-left
    fn world_ray(&self, x: f32, y: f32, viewport: Viewport) -> Ray;
}

/// World-space sketch points with their running bounds
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedPath {
    pub points: Vec<Vec3>,
    pub bounds: Bounds3,
}

impl Default for ProjectedPath {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            bounds: Bounds3::empty(),
        }
    }
}

impl ProjectedPath {
    pub fn push(&mut self, point: Vec3) {
        self.points.push(point);
        self.bounds.include(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.bounds = Bounds3::empty();
    }
}

/// Projects pixels onto the sketch plane z = `depth`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathProjector {
    plane: Plane,
}

impl Default for PathProjector {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl PathProjector {
    pub fn new(depth: f32) -> Self {
        Self {
            plane: Plane::facing_positive_z(depth),
        }
    }

    /// Project a single pixel
    ///
    /// Tries the plane facing +Z, then the plane facing -Z, and falls back to
    /// the world origin when the ray misses both.
    pub fn project_point(&self, caster: &dyn RayCaster, pixel: Vec2, viewport: Viewport) -> Vec3 {
        let ray = caster.world_ray(pixel.x, pixel.y, viewport);
        self.plane
            .intersect(&ray)
            .or_else(|| self.plane.flipped().intersect(&ray))
            .unwrap_or(Vec3::ZERO)
    }

    /// Project every pixel, preserving order
    pub fn project_path(&self, caster: &dyn RayCaster, pixels: &[Vec2], viewport: Viewport) -> ProjectedPath {
        let mut path = ProjectedPath::default();
        for &pixel in pixels {
            path.push(self.project_point(caster, pixel, viewport));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parallel rays along a fixed direction, one world unit per pixel
    struct ParallelCaster {
        origin_z: f32,
        direction: Vec3,
    }

    impl RayCaster for ParallelCaster {
        fn world_ray(&self, x: f32, y: f32, _viewport: Viewport) -> Ray {
            Ray::new(Vec3::new(x, -y, self.origin_z), self.direction)
        }
    }

    const VIEWPORT: Viewport = Viewport { width: 100.0, height: 100.0 };

    #[test]
    fn test_front_hit() {
        let caster = ParallelCaster { origin_z: 10.0, direction: Vec3::new(0.0, 0.0, -1.0) };
        let p = PathProjector::default().project_point(&caster, Vec2::new(3.0, 4.0), VIEWPORT);
        assert_eq!(p, Vec3::new(3.0, -4.0, 0.0));
    }

    #[test]
    fn test_back_side_uses_flipped_plane() {
        let caster = ParallelCaster { origin_z: -10.0, direction: Vec3::Z };
        let p = PathProjector::new(2.0).project_point(&caster, Vec2::new(1.0, 1.0), VIEWPORT);
        assert!((p - Vec3::new(1.0, -1.0, 2.0)).length() < 0.0001);
    }

    #[test]
    fn test_parallel_ray_falls_back_to_origin() {
        let caster = ParallelCaster { origin_z: 10.0, direction: Vec3::X };
        let p = PathProjector::default().project_point(&caster, Vec2::new(5.0, 5.0), VIEWPORT);
        assert_eq!(p, Vec3::ZERO);
    }

    #[test]
    fn test_path_keeps_order_and_bounds() {
        let caster = ParallelCaster { origin_z: 10.0, direction: Vec3::new(0.0, 0.0, -1.0) };
        let pixels = [Vec2::new(2.0, 0.0), Vec2::new(-1.0, -3.0), Vec2::new(4.0, 1.0)];
        let path = PathProjector::default().project_path(&caster, &pixels, VIEWPORT);

        assert_eq!(path.len(), 3);
        assert_eq!(path.points[1], Vec3::new(-1.0, 3.0, 0.0));
        assert_eq!(path.bounds.min, Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(path.bounds.max, Vec3::new(4.0, 3.0, 0.0));
    }

    #[test]
    fn test_viewport_aspect() {
        assert_eq!(Viewport::new(960.0, 720.0).aspect(), 960.0 / 720.0);
        assert_eq!(Viewport::new(960.0, 0.0).aspect(), 1.0);
    }
}
