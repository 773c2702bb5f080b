//! Sketch session: capture through classification

use crate::{
    classify, ClassifierConfig, CompletedStroke, DiscardReason, MenuLayout, PathProjector,
    RayCaster, ShapeRequest, SketchCapture, SketchMode, Viewport,
};
use crayon_input::PointerButtons;
use crayon_math::Vec2;
use crayon_physics::{BodyKey, PhysicsWorld};

/// What a released stroke turned into
#[derive(Clone, Debug, PartialEq)]
pub enum SketchOutcome {
    /// Release landed in the menu strip
    ModeChanged(SketchMode),
    /// Stroke classified under the current mode
    Shape(ShapeRequest),
    Discarded(DiscardReason),
    /// Release outside the menu with no samples
    Empty,
}

/// Owns the stroke in progress and the current sketch mode
#[derive(Clone, Debug, Default)]
pub struct SketchSession {
    capture: SketchCapture,
    mode: SketchMode,
    menu: MenuLayout,
    projector: PathProjector,
    config: ClassifierConfig,
}

impl SketchSession {
    pub fn new(menu: MenuLayout, projector: PathProjector, config: ClassifierConfig) -> Self {
        Self {
            capture: SketchCapture::new(),
            mode: SketchMode::default(),
            menu,
            projector,
            config,
        }
    }

    pub fn mode(&self) -> SketchMode {
        self.mode
    }

    pub fn menu(&self) -> &MenuLayout {
        &self.menu
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Samples of the stroke being drawn, in window pixels
    pub fn current_path(&self) -> &[Vec2] {
        self.capture.points()
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.capture.pointer_moved(position);
    }

    pub fn button_pressed(&mut self, buttons: PointerButtons) {
        self.capture.button_pressed(buttons);
    }

    /// Once per frame, before any release is handled
    pub fn sample(&mut self) {
        self.capture.sample();
    }

    /// Handle a button release; `None` unless it ended a stroke
    pub fn button_released(
        &mut self,
        buttons: PointerButtons,
        caster: &dyn RayCaster,
        viewport: Viewport,
    ) -> Option<SketchOutcome> {
        let stroke = self.capture.button_released(buttons)?;
        Some(self.resolve(stroke, caster, viewport))
    }

    /// Route a finished stroke to the menu or the classifier
    pub fn resolve(
        &mut self,
        stroke: CompletedStroke,
        caster: &dyn RayCaster,
        viewport: Viewport,
    ) -> SketchOutcome {
        let fraction = MenuLayout::to_fraction(stroke.release, viewport.size());
        if let Some(mode) = self.menu.select(fraction) {
            log::debug!("Sketch mode: {}", mode);
            self.mode = mode;
            return SketchOutcome::ModeChanged(mode);
        }

        if stroke.points.is_empty() {
            return SketchOutcome::Empty;
        }

        let path = self.projector.project_path(caster, &stroke.points, viewport);
        match classify(&path, self.mode, &self.config) {
            Ok(request) => SketchOutcome::Shape(request),
            Err(reason) => {
                log::debug!("Discarded {} stroke: {}", self.mode, reason);
                SketchOutcome::Discarded(reason)
            }
        }
    }
}

/// Create the physics body for a shape request
///
/// Returns `None` for chains with fewer than two vertices.
pub fn commit(request: &ShapeRequest, world: &mut PhysicsWorld) -> Option<BodyKey> {
    match request {
        ShapeRequest::Circle { center, radius } => Some(world.create_circle(*center, *radius)),
        ShapeRequest::Box {
            center,
            width,
            height,
        } => Some(world.create_box(*center, *width, *height)),
        ShapeRequest::Chain { vertices } => world.create_static_chain(vertices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crayon_math::{Ray, Vec3};

    struct StraightDown;

    impl RayCaster for StraightDown {
        fn world_ray(&self, x: f32, y: f32, _viewport: Viewport) -> Ray {
            Ray::new(Vec3::new(x / 10.0, -y / 10.0, 10.0), Vec3::new(0.0, 0.0, -1.0))
        }
    }

    const VIEWPORT: Viewport = Viewport { width: 1000.0, height: 1000.0 };

    fn stroke(points: &[(f32, f32)]) -> CompletedStroke {
        let points: Vec<Vec2> = points.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
        let release = points.last().copied().unwrap_or(Vec2::new(500.0, 500.0));
        CompletedStroke { points, release }
    }

    #[test]
    fn test_menu_release_changes_mode_only() {
        let mut session = SketchSession::default();
        let outcome = session.resolve(stroke(&[(400.0, 600.0), (500.0, 100.0)]), &StraightDown, VIEWPORT);
        assert_eq!(outcome, SketchOutcome::ModeChanged(SketchMode::Circle));
        assert_eq!(session.mode(), SketchMode::Circle);
    }

    #[test]
    fn test_empty_stroke() {
        let mut session = SketchSession::default();
        assert_eq!(session.resolve(stroke(&[]), &StraightDown, VIEWPORT), SketchOutcome::Empty);
    }

    #[test]
    fn test_stroke_classified_under_current_mode() {
        let mut session = SketchSession::default();
        session.resolve(stroke(&[(900.0, 50.0)]), &StraightDown, VIEWPORT);
        assert_eq!(session.mode(), SketchMode::Box);

        let outcome = session.resolve(stroke(&[(200.0, 300.0), (230.0, 350.0)]), &StraightDown, VIEWPORT);
        match outcome {
            SketchOutcome::Shape(ShapeRequest::Box { width, height, .. }) => {
                assert!((width - 3.0).abs() < 0.0001);
                assert!((height - 5.0).abs() < 0.0001);
            }
            other => panic!("expected box, got {:?}", other),
        }
    }

    #[test]
    fn test_commit_creates_bodies() {
        let mut world = PhysicsWorld::new();
        let circle = commit(&ShapeRequest::Circle { center: Vec2::ZERO, radius: 1.0 }, &mut world);
        let short_chain = commit(&ShapeRequest::Chain { vertices: vec![Vec2::ZERO] }, &mut world);
        assert!(circle.is_some());
        assert!(short_chain.is_none());
        assert_eq!(world.body_count(), 1);
    }

    #[test]
    fn test_session_drives_capture() {
        let mut session = SketchSession::default();
        session.button_pressed(PointerButtons::PRIMARY);
        session.pointer_moved(Vec2::new(100.0, 500.0));
        session.sample();
        session.pointer_moved(Vec2::new(300.0, 520.0));
        session.sample();
        assert_eq!(session.current_path().len(), 2);

        let outcome = session
            .button_released(PointerButtons::PRIMARY, &StraightDown, VIEWPORT)
            .expect("primary release ends the stroke");
        assert!(matches!(outcome, SketchOutcome::Shape(ShapeRequest::Chain { .. })));
        assert!(session.current_path().is_empty());
    }
}
