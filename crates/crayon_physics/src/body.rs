//! Body table entries for sketched shapes

use crayon_math::Vec2;
use rapier2d::prelude::RigidBodyHandle;
use slotmap::new_key_type;

// Define generational key type for sketched bodies
new_key_type! {
    /// Key to a sketched body in the physics world
    ///
    /// Uses generational indexing so a key to a removed body never aliases a
    /// body created later, including across a world reset.
    pub struct BodyKey;
}

/// Render-time parameters for a sketched body
#[derive(Clone, Debug, PartialEq)]
pub enum SimShape {
    /// Dynamic circle
    Circle { radius: f32 },
    /// Dynamic box (full width and height)
    Box { width: f32, height: f32 },
    /// Static open polyline, vertices relative to the body origin
    Chain { vertices: Vec<Vec2> },
}

impl SimShape {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            SimShape::Circle { .. } => "circle",
            SimShape::Box { .. } => "box",
            SimShape::Chain { .. } => "chain",
        }
    }
}

/// A sketched body: engine handle plus what the renderer needs to draw it
#[derive(Clone, Debug)]
pub struct SimBody {
    /// Handle into the engine's rigid body set
    pub handle: RigidBodyHandle,
    /// Shape parameters captured at creation time
    pub shape: SimShape,
}

impl SimBody {
    /// Whether this body never moves (background chains)
    pub fn is_static(&self) -> bool {
        matches!(self.shape, SimShape::Chain { .. })
    }
}

/// Current placement of a body in the physics plane
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BodyPose {
    /// Body origin in world units
    pub position: Vec2,
    /// Counter-clockwise rotation in radians
    pub angle: f32,
}

impl BodyPose {
    /// Transform a body-local point into world space
    pub fn transform_point(&self, local: Vec2) -> Vec2 {
        self.position + local.rotated(self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_kind() {
        assert_eq!(SimShape::Circle { radius: 1.0 }.kind(), "circle");
        assert_eq!(SimShape::Box { width: 1.0, height: 2.0 }.kind(), "box");
        assert_eq!(SimShape::Chain { vertices: vec![] }.kind(), "chain");
    }

    #[test]
    fn test_only_chains_are_static() {
        let handle = RigidBodyHandle::invalid();
        let circle = SimBody { handle, shape: SimShape::Circle { radius: 1.0 } };
        let chain = SimBody { handle, shape: SimShape::Chain { vertices: vec![Vec2::ZERO, Vec2::X] } };
        assert!(!circle.is_static());
        assert!(chain.is_static());
    }

    #[test]
    fn test_pose_transform_point() {
        let pose = BodyPose {
            position: Vec2::new(1.0, 1.0),
            angle: std::f32::consts::FRAC_PI_2,
        };
        let p = pose.transform_point(Vec2::new(1.0, 0.0));
        assert!((p.x - 1.0).abs() < 0.0001);
        assert!((p.y - 2.0).abs() < 0.0001);
    }
}
