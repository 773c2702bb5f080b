//! Rays and single-sided planes

use crate::Vec3;

/// A half-line from `origin` along `direction`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray; the direction is normalized
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Point at parameter `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// A plane that only faces one way
///
/// The plane equation is: normal · point = distance.
/// Rays only hit the plane when they travel against the normal, i.e. when
/// they approach from the side the plane is facing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    /// Unit normal pointing to the facing side
    pub normal: Vec3,
    /// Signed distance from origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a point on the plane and a normal
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let n = normal.normalized();
        Self {
            normal: n,
            distance: n.dot(point),
        }
    }

    /// The plane z = `z` facing +Z
    pub fn facing_positive_z(z: f32) -> Self {
        Self::from_point_normal(Vec3::new(0.0, 0.0, z), Vec3::Z)
    }

    /// The same plane facing the other way
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// Signed distance from a point to the plane
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.distance
    }

    /// Intersect a ray with the facing side of the plane
    ///
    /// Returns `None` when the ray is parallel to the plane, travels along
    /// the normal (hits the back side), or the result is not finite.
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        let rate = ray.direction.dot(self.normal);
        if rate >= 0.0 {
            return None;
        }
        let t = -self.signed_distance(ray.origin) / rate;
        let hit = ray.at(t);
        hit.is_finite().then_some(hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_direction_normalized() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(ray.at(2.0), Vec3::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn test_front_facing_hit() {
        let plane = Plane::facing_positive_z(0.0);
        let ray = Ray::new(Vec3::new(1.0, 2.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = plane.intersect(&ray).expect("ray faces the plane");
        assert!((hit.x - 1.0).abs() < 0.0001);
        assert!((hit.y - 2.0).abs() < 0.0001);
        assert!(hit.z.abs() < 0.0001);
    }

    #[test]
    fn test_back_side_misses() {
        let plane = Plane::facing_positive_z(0.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(plane.intersect(&ray).is_none());
        // The flipped plane faces this ray
        assert!(plane.flipped().intersect(&ray).is_some());
    }

    #[test]
    fn test_parallel_misses_both_sides() {
        let plane = Plane::facing_positive_z(0.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::X);
        assert!(plane.intersect(&ray).is_none());
        assert!(plane.flipped().intersect(&ray).is_none());
    }

    #[test]
    fn test_offset_plane() {
        let plane = Plane::facing_positive_z(2.0);
        assert_eq!(plane.signed_distance(Vec3::new(0.0, 0.0, 3.0)), 1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = plane.intersect(&ray).unwrap();
        assert!((hit.z - 2.0).abs() < 0.0001);
    }
}
