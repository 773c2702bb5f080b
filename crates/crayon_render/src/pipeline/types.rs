//! GPU-compatible uniform types
//!
//! Must match the `Uniforms` struct in `crayon.wgsl`.

use bytemuck::{Pod, Zeroable};
use crayon_math::{mat4, Mat4};

/// Per-pass uniforms
/// Layout: 96 bytes total
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct RenderUniforms {
    /// Projection * view (64 bytes)
    pub view_proj: Mat4,
    /// Direction towards the light, w unused (16 bytes)
    pub light_dir: [f32; 4],
    /// ambient, diffuse, lit flag, unused (16 bytes)
    pub params: [f32; 4],
}

impl Default for RenderUniforms {
    fn default() -> Self {
        Self::lit(mat4::IDENTITY, [0.3, 1.0, 0.6], 0.35, 0.65)
    }
}

impl RenderUniforms {
    /// Uniforms for lit world geometry
    pub fn lit(view_proj: Mat4, light_dir: [f32; 3], ambient: f32, diffuse: f32) -> Self {
        Self {
            view_proj,
            light_dir: [light_dir[0], light_dir[1], light_dir[2], 0.0],
            params: [ambient, diffuse, 1.0, 0.0],
        }
    }

    /// Uniforms for unlit pixel-space overlays
    pub fn overlay(width: f32, height: f32) -> Self {
        Self {
            view_proj: mat4::pixel_orthographic(width.max(1.0), height.max(1.0)),
            light_dir: [0.0; 4],
            params: [1.0, 0.0, 0.0, 0.0],
        }
    }
}
