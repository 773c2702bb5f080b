//! Simulation system
//!
//! Runs the per-frame update in a fixed order:
//! - Delta time calculation
//! - Camera input and zoom
//! - One fixed physics step

use std::time::Instant;
use crayon_input::{CameraManipulator, InputSnapshot};
use crayon_physics::PhysicsWorld;

/// Manages the frame update
pub struct SimulationSystem {
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Run one frame, returning the (capped) real frame time
    ///
    /// The physics world advances by its own fixed timestep whatever the
    /// frame time is; only the camera zoom uses real time.
    pub fn update(
        &mut self,
        world: &mut PhysicsWorld,
        manipulator: &mut dyn CameraManipulator,
        input: &InputSnapshot,
    ) -> f32 {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.25);
        self.last_frame = now;

        Self::advance(world, manipulator, input, dt);
        dt
    }

    fn advance(
        world: &mut PhysicsWorld,
        manipulator: &mut dyn CameraManipulator,
        input: &InputSnapshot,
        dt: f32,
    ) {
        manipulator.handle_input(input);
        manipulator.advance_by_timestep(dt);
        world.step(dt);
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crayon_input::TurntableManipulator;
    use crayon_math::Vec2;

    #[test]
    fn test_update_steps_world_once() {
        let mut sim = SimulationSystem::new();
        let mut world = PhysicsWorld::new();
        let mut turntable = TurntableManipulator::new();

        std::thread::sleep(std::time::Duration::from_millis(20));
        let dt = sim.update(&mut world, &mut turntable, &InputSnapshot::default());

        assert!(dt >= 0.02);
        assert_eq!(world.step_count(), 1);
        assert!((world.elapsed() - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_advance_applies_zoom_with_real_time() {
        let mut world = PhysicsWorld::new();
        let key = world.create_circle(Vec2::new(0.0, 10.0), 1.0);
        let mut turntable = TurntableManipulator::new();
        let input = InputSnapshot { zoom_out: true, ..Default::default() };

        SimulationSystem::advance(&mut world, &mut turntable, &input, 1.0);

        assert!((turntable.distance() - 15.0).abs() < 0.001);
        assert!(world.pose(key).unwrap().position.y < 10.0);
        assert_eq!(world.step_count(), 1);
    }
}
