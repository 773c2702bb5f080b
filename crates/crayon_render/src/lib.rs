//! Rendering for the crayon physics sandbox
//!
//! Bodies are turned into CPU triangle lists every frame and drawn with a
//! single lit shader. Overlays (menu strip, stroke in progress) share the
//! shader with lighting disabled and a pixel-space projection.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera`] - View/projection matrices and pixel ray casting
//! - [`mesh`] - Sphere, box, ribbon and overlay mesh builders
//! - [`scene`] - Builds per-frame meshes from the physics world and sketch session
//! - [`pipeline::RenderPipeline`] - Scene and overlay pipelines with shader reload

pub mod context;
pub mod camera;
pub mod mesh;
pub mod scene;
pub mod shader;
pub mod pipeline;

pub use camera::Camera;
pub use mesh::{Mesh, MeshVertex};
pub use scene::{build_overlay, build_world_mesh, RenderStyle};
pub use shader::{ShaderError, ShaderSource};
