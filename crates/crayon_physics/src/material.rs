//! Physical material properties for sketched bodies

/// Physical material properties applied to every collider
///
/// Friction and restitution on a static chain still shape how dynamic
/// bodies bounce and slide against it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsMaterial {
    /// Mass per unit area
    pub density: f32,
    /// Friction coefficient (0.0 = ice, 1.0 = rubber)
    pub friction: f32,
    /// Restitution/bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,
}

impl Default for PhysicsMaterial {
    fn default() -> Self {
        Self::CRAYON
    }
}

impl PhysicsMaterial {
    /// Light, slightly grippy, perfectly elastic
    pub const CRAYON: Self = Self {
        density: 0.2,
        friction: 0.3,
        restitution: 1.0,
    };

    /// Create a new physics material
    ///
    /// Density is clamped to be non-negative; friction and restitution are
    /// clamped to the range [0.0, 1.0].
    pub fn new(density: f32, friction: f32, restitution: f32) -> Self {
        Self {
            density: density.max(0.0),
            friction: friction.clamp(0.0, 1.0),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }
}
