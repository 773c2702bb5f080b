//! Per-frame geometry
//!
//! The renderer holds no body state of its own: each frame it walks the
//! physics world, reads every pose and rebuilds the meshes from the stored
//! shape parameters.

use crate::Mesh;
use crayon_core::{MenuLayout, SketchMode, Viewport};
use crayon_math::{Vec2, Vec3};
use crayon_physics::{BodyPose, PhysicsWorld, SimShape};

/// Colors and tessellation for scene and overlay geometry
#[derive(Clone, Debug, PartialEq)]
pub struct RenderStyle {
    pub circle_color: [f32; 3],
    pub box_color: [f32; 3],
    pub chain_color: [f32; 3],
    /// Menu color for background mode
    pub background_color: [f32; 3],
    pub stroke_color: [f32; 3],
    /// Half-depth of boxes along z
    pub box_depth: f32,
    pub ribbon_thickness: f32,
    pub ribbon_depth: f32,
    pub sphere_stacks: u32,
    pub sphere_slices: u32,
    /// Alpha of the current mode's menu cell
    pub highlight_alpha: f32,
    /// Alpha of the other menu cells
    pub menu_alpha: f32,
    /// Stroke width in pixels
    pub stroke_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            circle_color: [0.20, 0.79, 0.20],
            box_color: [0.44, 0.52, 0.93],
            chain_color: [0.9, 0.5, 0.2],
            background_color: [0.95, 0.25, 0.25],
            stroke_color: [0.1, 0.1, 0.1],
            box_depth: 0.2,
            ribbon_thickness: 0.04,
            ribbon_depth: 0.5,
            sphere_stacks: 20,
            sphere_slices: 40,
            highlight_alpha: 0.4,
            menu_alpha: 0.12,
            stroke_width: 3.0,
        }
    }
}

impl RenderStyle {
    /// Menu color for a sketch mode
    pub fn mode_color(&self, mode: SketchMode) -> [f32; 3] {
        match mode {
            SketchMode::Background => self.background_color,
            SketchMode::Circle => self.circle_color,
            SketchMode::Box => self.box_color,
        }
    }
}

fn rgba(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha]
}

/// Place a body-local point in world space on the z = 0 plane
fn place(pose: &BodyPose, local: Vec3) -> Vec3 {
    Vec3::from_xy(pose.transform_point(local.xy()), local.z)
}

/// Append the mesh for one body
pub fn push_body(mesh: &mut Mesh, shape: &SimShape, pose: &BodyPose, style: &RenderStyle) {
    match shape {
        SimShape::Circle { radius } => {
            let radius = *radius;
            let (sin, cos) = pose.angle.sin_cos();
            mesh.push_sphere(
                style.sphere_stacks,
                style.sphere_slices,
                rgba(style.circle_color, 1.0),
                |p| {
                    let n = Vec3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z);
                    (Vec3::from_xy(pose.position, 0.0) + n * radius, n)
                },
            );
        }
        SimShape::Box { width, height } => {
            let half = Vec3::new(width / 2.0, height / 2.0, style.box_depth);
            let mut corners = [Vec3::ZERO; 8];
            for (i, corner) in corners.iter_mut().enumerate() {
                let sx = if i & 1 == 0 { -1.0 } else { 1.0 };
                let sy = if i & 2 == 0 { -1.0 } else { 1.0 };
                let sz = if i & 4 == 0 { -1.0 } else { 1.0 };
                *corner = place(pose, Vec3::new(half.x * sx, half.y * sy, half.z * sz));
            }
            mesh.push_box(corners, rgba(style.box_color, 1.0));
        }
        SimShape::Chain { vertices } => {
            let points: Vec<Vec2> = vertices.iter().map(|&v| pose.transform_point(v)).collect();
            mesh.push_ribbon(
                &points,
                style.ribbon_thickness,
                style.ribbon_depth,
                rgba(style.chain_color, 1.0),
            );
        }
    }
}

/// Build the world-space mesh for every registered body
pub fn build_world_mesh(world: &PhysicsWorld, style: &RenderStyle) -> Mesh {
    let mut mesh = Mesh::new();
    for (_, body, pose) in world.iter() {
        push_body(&mut mesh, &body.shape, &pose, style);
    }
    mesh
}

/// Build the pixel-space overlay: menu strip and the stroke in progress
pub fn build_overlay(
    menu: &MenuLayout,
    mode: SketchMode,
    stroke: &[Vec2],
    viewport: Viewport,
    style: &RenderStyle,
) -> Mesh {
    let mut mesh = Mesh::new();
    let strip_bottom = menu.strip_height * viewport.height;

    for cell_mode in SketchMode::ALL {
        let (start, end) = menu.cell(cell_mode);
        let alpha = if cell_mode == mode {
            style.highlight_alpha
        } else {
            style.menu_alpha
        };
        mesh.push_rect(
            Vec2::new(start * viewport.width, 0.0),
            Vec2::new(end * viewport.width, strip_bottom),
            rgba(style.mode_color(cell_mode), alpha),
        );
    }

    mesh.push_stroke(stroke, style.stroke_width, rgba(style.stroke_color, 1.0));
    mesh
}
