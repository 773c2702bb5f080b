//! Shape classification
//!
//! Reduces a projected path to a concrete shape request according to the
//! current [`SketchMode`]. Only the path's bounding box matters for circles
//! and boxes; background strokes keep their simplified outline.

use crate::{ProjectedPath, SketchMode};
use crayon_math::{Vec2, Vec3};
use std::fmt;

/// A shape ready to be created in the physics world
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeRequest {
    Circle { center: Vec2, radius: f32 },
    Box { center: Vec2, width: f32, height: f32 },
    /// Static open polyline, in stroke order
    Chain { vertices: Vec<Vec2> },
}

impl ShapeRequest {
    pub fn mode(&self) -> SketchMode {
        match self {
            ShapeRequest::Circle { .. } => SketchMode::Circle,
            ShapeRequest::Box { .. } => SketchMode::Box,
            ShapeRequest::Chain { .. } => SketchMode::Background,
        }
    }
}

/// Why a stroke produced no shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DiscardReason {
    /// Bounding-box diagonal reached the size cap
    TooLarge { diagonal: f32 },
    /// Background stroke simplified to fewer than two vertices
    TooFewPoints { count: usize },
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscardReason::TooLarge { diagonal } => {
                write!(f, "stroke too large (diagonal {:.2})", diagonal)
            }
            DiscardReason::TooFewPoints { count } => {
                write!(f, "too few points for a chain ({})", count)
            }
        }
    }
}

/// Classification thresholds, in world units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifierConfig {
    /// Strokes whose bounding-box diagonal is at least this long are dropped
    pub max_extent: f32,
    /// Background points closer than this to the last kept point are dropped
    pub min_segment: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_extent: 100.0,
            min_segment: 0.1,
        }
    }
}

/// Drop points closer than `min_segment` to the previously kept point
///
/// The first point is always kept. Returns the xy projection of the kept
/// points.
pub fn simplify_polyline(points: &[Vec3], min_segment: f32) -> Vec<Vec2> {
    let mut kept: Vec<Vec3> = Vec::with_capacity(points.len());
    for &p in points {
        match kept.last() {
            Some(last) if last.distance(p) < min_segment => {}
            _ => kept.push(p),
        }
    }
    kept.into_iter().map(Vec3::xy).collect()
}

/// Decide what `mode` builds from `path`
pub fn classify(
    path: &ProjectedPath,
    mode: SketchMode,
    config: &ClassifierConfig,
) -> Result<ShapeRequest, DiscardReason> {
    let diagonal = path.bounds.diagonal();
    if diagonal >= config.max_extent {
        return Err(DiscardReason::TooLarge { diagonal });
    }

    let center = path.bounds.center().xy();
    match mode {
        SketchMode::Circle => Ok(ShapeRequest::Circle {
            center,
            radius: diagonal / 2.0,
        }),
        SketchMode::Box => {
            let size = path.bounds.size().abs();
            Ok(ShapeRequest::Box {
                center,
                width: size.x,
                height: size.y,
            })
        }
        SketchMode::Background => {
            let vertices = simplify_polyline(&path.points, config.min_segment);
            if vertices.len() < 2 {
                return Err(DiscardReason::TooFewPoints {
                    count: vertices.len(),
                });
            }
            Ok(ShapeRequest::Chain { vertices })
        }
    }
}
