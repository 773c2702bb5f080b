//! CPU triangle meshes
//!
//! Every builder appends non-indexed triangles to a [`Mesh`]. Positions are
//! world units for scene meshes and pixels for overlay meshes.

use bytemuck::{Pod, Zeroable};
use crayon_math::{Vec2, Vec3};
use std::f32::consts::PI;

/// Vertex layout shared by the scene and overlay pipelines
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    /// Zero for unlit geometry
    pub normal: [f32; 3],
    /// RGBA
    pub color: [f32; 4],
}

impl MeshVertex {
    pub fn new(position: Vec3, normal: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
        }
    }
}

/// Growable triangle list
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn push_triangle(&mut self, a: MeshVertex, b: MeshVertex, c: MeshVertex) {
        self.vertices.extend_from_slice(&[a, b, c]);
    }

    /// Flat-shaded quad from four corners in winding order
    pub fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3, color: [f32; 4]) {
        let v = corners.map(|p| MeshVertex::new(p, normal, color));
        self.push_triangle(v[0], v[1], v[2]);
        self.push_triangle(v[0], v[2], v[3]);
    }

    /// Append a UV sphere
    ///
    /// `transform` maps each unit-sphere point and normal into place.
    pub fn push_sphere(
        &mut self,
        stacks: u32,
        slices: u32,
        color: [f32; 4],
        transform: impl Fn(Vec3) -> (Vec3, Vec3),
    ) {
        let stacks = stacks.max(2);
        let slices = slices.max(3);
        let point = |stack: u32, slice: u32| {
            let theta = PI * stack as f32 / stacks as f32;
            let phi = 2.0 * PI * slice as f32 / slices as f32;
            let (sin_t, cos_t) = theta.sin_cos();
            let (sin_p, cos_p) = phi.sin_cos();
            let (p, n) = transform(Vec3::new(sin_t * cos_p, cos_t, sin_t * sin_p));
            MeshVertex::new(p, n, color)
        };

        for stack in 0..stacks {
            for slice in 0..slices {
                let a = point(stack, slice);
                let b = point(stack + 1, slice);
                let c = point(stack + 1, slice + 1);
                let d = point(stack, slice + 1);
                if stack != 0 {
                    self.push_triangle(a, c, b);
                }
                if stack + 1 != stacks {
                    self.push_triangle(a, d, c);
                }
            }
        }
    }

    /// Append a box from its 8 corners, indexed by the bits (x, y, z)
    pub fn push_box(&mut self, corners: [Vec3; 8], color: [f32; 4]) {
        // -x, +x, -y, +y, -z, +z
        const FACES: [[usize; 4]; 6] = [
            [0, 2, 6, 4],
            [1, 5, 7, 3],
            [0, 4, 5, 1],
            [2, 3, 7, 6],
            [0, 1, 3, 2],
            [4, 6, 7, 5],
        ];

        let center = corners.iter().fold(Vec3::ZERO, |acc, &c| acc + c) / 8.0;
        for idx in FACES {
            let quad = idx.map(|i| corners[i]);
            let face_center = (quad[0] + quad[1] + quad[2] + quad[3]) / 4.0;
            let normal = (face_center - center).normalized();
            self.push_quad(quad, normal, color);
        }
    }

    /// Append a thick polyline extruded along z
    ///
    /// Each segment becomes a slab `thickness` wide in the xy plane and
    /// `depth` deep, centered on z = 0. Zero-length segments are skipped.
    pub fn push_ribbon(&mut self, points: &[Vec2], thickness: f32, depth: f32, color: [f32; 4]) {
        let half_t = thickness / 2.0;
        let half_d = depth / 2.0;
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let along = b - a;
            if along.length_squared() <= f32::EPSILON {
                continue;
            }
            let side = along.perp().normalized() * half_t;

            let mut corners = [Vec3::ZERO; 8];
            for (i, corner) in corners.iter_mut().enumerate() {
                let base = if i & 1 == 0 { a } else { b };
                let offset = if i & 2 == 0 { -side } else { side };
                let z = if i & 4 == 0 { -half_d } else { half_d };
                *corner = Vec3::from_xy(base + offset, z);
            }
            self.push_box(corners, color);
        }
    }

    /// Append an axis-aligned pixel rectangle (unlit)
    pub fn push_rect(&mut self, min: Vec2, max: Vec2, color: [f32; 4]) {
        let corners = [
            Vec3::new(min.x, min.y, 0.0),
            Vec3::new(max.x, min.y, 0.0),
            Vec3::new(max.x, max.y, 0.0),
            Vec3::new(min.x, max.y, 0.0),
        ];
        self.push_quad(corners, Vec3::ZERO, color);
    }

    /// Append a flat pixel-space polyline `width` pixels wide (unlit)
    pub fn push_stroke(&mut self, points: &[Vec2], width: f32, color: [f32; 4]) {
        let half = width / 2.0;
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let along = b - a;
            if along.length_squared() <= f32::EPSILON {
                continue;
            }
            let side = along.perp().normalized() * half;
            let corners = [a - side, b - side, b + side, a + side].map(|p| Vec3::from_xy(p, 0.0));
            self.push_quad(corners, Vec3::ZERO, color);
        }
    }
}
