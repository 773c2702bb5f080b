//! Running axis-aligned bounding box

use crate::Vec3;

/// Axis-aligned bounding box grown one point at a time
///
/// An empty box has `min = +inf` and `max = -inf`, so the first
/// [`include`](Bounds3::include) sets both corners to that point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    /// Minimum corner (all components are minimums)
    pub min: Vec3,
    /// Maximum corner (all components are maximums)
    pub max: Vec3,
}

impl Default for Bounds3 {
    fn default() -> Self {
        Self::empty()
    }
}

impl Bounds3 {
    /// A box that contains nothing
    pub const fn empty() -> Self {
        Self {
            min: Vec3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vec3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Create a box from explicit corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Self {
        let mut bounds = Self::empty();
        for p in points {
            bounds.include(*p);
        }
        bounds
    }

    /// Whether no point has been included yet
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Grow the box to contain `point`
    pub fn include(&mut self, point: Vec3) {
        self.min = self.min.min_components(point);
        self.max = self.max.max_components(point);
    }

    /// Midpoint of the box
    pub fn center(&self) -> Vec3 {
        self.min + (self.max - self.min) * 0.5
    }

    /// Full size in each dimension
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the min-to-max diagonal (0 for an empty box)
    pub fn diagonal(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.size().length()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let b = Bounds3::empty();
        assert!(b.is_empty());
        assert_eq!(b.diagonal(), 0.0);
    }

    #[test]
    fn test_first_point_sets_both_corners() {
        let mut b = Bounds3::empty();
        b.include(Vec3::new(1.0, -2.0, 3.0));
        assert!(!b.is_empty());
        assert_eq!(b.min, Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(b.max, Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(b.diagonal(), 0.0);
    }

    #[test]
    fn test_running_min_max() {
        let points = [
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(4.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        let b = Bounds3::from_points(&points);
        assert_eq!(b.min, Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(b.max, Vec3::new(4.0, 2.0, 0.0));
        assert_eq!(b.center(), Vec3::new(2.0, 1.0, 0.0));
        assert!((b.diagonal() - 20.0_f32.sqrt()).abs() < 0.0001);
    }
}
