//! Sketch-to-body pipeline for the crayon physics sandbox
//!
//! Strokes flow one way through this crate:
//!
//! - [`SketchCapture`] - Records pointer samples while the draw button is held
//! - [`MenuLayout`] / [`SketchMode`] - Menu strip hit testing and the current mode
//! - [`PathProjector`] - Casts screen samples onto the sketch plane
//! - [`classify`] - Turns a projected path into a [`ShapeRequest`]
//! - [`SketchSession`] - Ties the stages together and commits shapes to a
//!   [`PhysicsWorld`]

mod capture;
mod mode;
mod projector;
mod classifier;
mod session;

pub use capture::{CompletedStroke, SketchCapture};
pub use mode::{MenuLayout, SketchMode};
pub use projector::{PathProjector, ProjectedPath, RayCaster, Viewport};
pub use classifier::{classify, simplify_polyline, ClassifierConfig, DiscardReason, ShapeRequest};
pub use session::{commit, SketchOutcome, SketchSession};

// Re-export commonly used types for convenience
pub use crayon_input::PointerButtons;
pub use crayon_math::{Bounds3, Ray, Vec2, Vec3};
pub use crayon_physics::{BodyKey, PhysicsWorld};
