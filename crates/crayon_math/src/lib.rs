//! Math types for the crayon physics sandbox
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector used for screen positions and physics coordinates
//! - [`Vec3`] - 3D vector used for world-space sketch points
//! - [`Bounds3`] - Running axis-aligned bounding box
//! - [`Ray`] / [`Plane`] - Ray casting against a single-sided plane
//! - [`CameraFrame`] - Eye position plus orthonormal look-at basis
//! - [`mat4`] - Column-major 4x4 matrix helpers for rendering

mod vec2;
mod vec3;
mod bounds;
mod ray;
mod frame;
pub mod mat4;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use bounds::Bounds3;
pub use ray::{Plane, Ray};
pub use frame::CameraFrame;
pub use mat4::Mat4;
