//! Physics world and simulation

use std::num::NonZeroUsize;

use crate::body::{BodyKey, BodyPose, SimBody, SimShape};
use crate::material::PhysicsMaterial;
use crayon_math::Vec2;
use rapier2d::prelude::*;
use slotmap::SlotMap;

/// Mass given to dynamic bodies whose collider has zero area
pub const FALLBACK_MASS: f32 = 1.0;

/// Default gravity along Y (negative = down)
pub const DEFAULT_GRAVITY: f32 = -9.8;

/// Default fixed simulation step in seconds
pub const DEFAULT_TIMESTEP: f32 = 1.0 / 60.0;

/// Configuration for the physics simulation
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsConfig {
    /// Gravity acceleration (applied to Y-axis, negative = down)
    pub gravity: f32,
    /// Simulated seconds per step, independent of frame time
    pub timestep: f32,
    /// Velocity solver iterations per step
    pub velocity_iterations: usize,
    /// Position (stabilization) iterations per step
    pub position_iterations: usize,
    /// Material applied to every collider
    pub material: PhysicsMaterial,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            timestep: DEFAULT_TIMESTEP,
            velocity_iterations: 6,
            position_iterations: 2,
            material: PhysicsMaterial::CRAYON,
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity
    pub fn new(gravity: f32) -> Self {
        Self {
            gravity,
            ..Self::default()
        }
    }

    /// Builder: set the fixed timestep
    pub fn with_timestep(mut self, timestep: f32) -> Self {
        self.timestep = timestep;
        self
    }

    /// Builder: set solver iteration counts
    pub fn with_iterations(mut self, velocity: usize, position: usize) -> Self {
        self.velocity_iterations = velocity;
        self.position_iterations = position;
        self
    }

    /// Builder: set the collider material
    pub fn with_material(mut self, material: PhysicsMaterial) -> Self {
        self.material = material;
        self
    }

    fn integration_parameters(&self) -> IntegrationParameters {
        let mut params = IntegrationParameters::default();
        params.dt = self.timestep;
        params.num_solver_iterations =
            NonZeroUsize::new(self.velocity_iterations).unwrap_or(NonZeroUsize::MIN);
        params.num_internal_stabilization_iterations = self.position_iterations;
        params
    }
}

/// The physics world containing every sketched body
///
/// Owns the engine state and the table from [`BodyKey`] to [`SimBody`].
/// Keys are only meaningful for the world that issued them (or its reset
/// successor, where they resolve to `None`).
pub struct PhysicsWorld {
    /// Sketched bodies (using generational keys)
    bodies: SlotMap<BodyKey, SimBody>,
    /// Physics configuration
    config: PhysicsConfig,
    /// Number of fixed steps taken
    steps: u64,

    // Engine state
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    rigid_bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self::from_parts(SlotMap::with_key(), config)
    }

    fn from_parts(bodies: SlotMap<BodyKey, SimBody>, config: PhysicsConfig) -> Self {
        Self {
            bodies,
            gravity: vector![0.0, config.gravity],
            integration_parameters: config.integration_parameters(),
            config,
            steps: 0,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Get the physics configuration
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Gravity vector applied to dynamic bodies
    pub fn gravity(&self) -> Vec2 {
        Vec2::new(self.gravity.x, self.gravity.y)
    }

    /// Create a dynamic circle centered at `center`
    pub fn create_circle(&mut self, center: Vec2, radius: f32) -> BodyKey {
        let collider = ColliderBuilder::ball(radius);
        self.insert(RigidBodyBuilder::dynamic(), center, collider, SimShape::Circle { radius })
    }

    /// Create a dynamic box centered at `center`
    pub fn create_box(&mut self, center: Vec2, width: f32, height: f32) -> BodyKey {
        let collider = ColliderBuilder::cuboid(width / 2.0, height / 2.0);
        self.insert(
            RigidBodyBuilder::dynamic(),
            center,
            collider,
            SimShape::Box { width, height },
        )
    }

    /// Create a static open chain through `polyline`, in order
    ///
    /// Returns `None` (and creates nothing) when fewer than two points are given.
    pub fn create_static_chain(&mut self, polyline: &[Vec2]) -> Option<BodyKey> {
        if polyline.len() < 2 {
            log::debug!("Ignoring chain with {} point(s)", polyline.len());
            return None;
        }

        let points: Vec<Point<Real>> = polyline.iter().map(|v| point![v.x, v.y]).collect();
        let collider = ColliderBuilder::polyline(points, None);
        let shape = SimShape::Chain {
            vertices: polyline.to_vec(),
        };
        Some(self.insert(RigidBodyBuilder::fixed(), Vec2::ZERO, collider, shape))
    }

    fn insert(
        &mut self,
        body: RigidBodyBuilder,
        position: Vec2,
        collider: ColliderBuilder,
        shape: SimShape,
    ) -> BodyKey {
        let material = self.config.material;
        let handle = self
            .rigid_bodies
            .insert(body.translation(vector![position.x, position.y]).build());
        let collider = collider
            .density(material.density)
            .friction(material.friction)
            .restitution(material.restitution)
            .restitution_combine_rule(CoefficientCombineRule::Max)
            .build();
        // Zero-area shapes (a click, a straight line in box mode) have no mass
        // and would never feel gravity
        let massless = collider.mass() <= 0.0;
        self.colliders
            .insert_with_parent(collider, handle, &mut self.rigid_bodies);
        if massless && self.rigid_bodies[handle].is_dynamic() {
            self.rigid_bodies[handle].set_additional_mass(FALLBACK_MASS, true);
        }

        log::debug!(
            "Created {} body at ({:.2}, {:.2})",
            shape.kind(),
            position.x,
            position.y
        );
        self.bodies.insert(SimBody { handle, shape })
    }

    /// Destroy every body and return an empty world with the same configuration
    ///
    /// The body table is cleared rather than replaced, so every key issued
    /// before the reset resolves to `None` afterwards.
    pub fn reset(mut self) -> Self {
        self.clear();
        self
    }

    /// In-place form of [`reset`](Self::reset)
    pub fn clear(&mut self) {
        let destroyed = self.bodies.len();
        let mut bodies = std::mem::take(&mut self.bodies);
        bodies.clear();
        *self = Self::from_parts(bodies, self.config.clone());
        log::info!("Physics world reset ({} bodies destroyed)", destroyed);
    }

    /// Advance the simulation by one fixed step
    ///
    /// `_frame_dt` is the real frame time; it is deliberately ignored so each
    /// call advances simulated time by exactly [`PhysicsConfig::timestep`].
    pub fn step(&mut self, _frame_dt: f32) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
        self.steps += 1;
    }

    /// Number of fixed steps taken since creation or reset
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Simulated seconds since creation or reset
    pub fn elapsed(&self) -> f64 {
        self.steps as f64 * self.config.timestep as f64
    }

    /// Get the number of registered bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Get a registered body by key
    pub fn get_body(&self, key: BodyKey) -> Option<&SimBody> {
        self.bodies.get(key)
    }

    /// Current pose of a registered body
    pub fn pose(&self, key: BodyKey) -> Option<BodyPose> {
        self.bodies.get(key).and_then(|body| self.pose_of(body))
    }

    fn pose_of(&self, body: &SimBody) -> Option<BodyPose> {
        self.rigid_bodies.get(body.handle).map(|rb| {
            let t = rb.translation();
            BodyPose {
                position: Vec2::new(t.x, t.y),
                angle: rb.rotation().angle(),
            }
        })
    }

    /// Iterate over all registered bodies with their current poses
    pub fn iter(&self) -> impl Iterator<Item = (BodyKey, &SimBody, BodyPose)> + '_ {
        self.bodies
            .iter()
            .filter_map(move |(key, body)| self.pose_of(body).map(|pose| (key, body, pose)))
    }

    /// Iterate over all body keys
    pub fn body_keys(&self) -> impl Iterator<Item = BodyKey> + '_ {
        self.bodies.keys()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
