//! Pointer sample capture

use crayon_input::PointerButtons;
use crayon_math::Vec2;

/// A finished stroke handed over on release of the draw button
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompletedStroke {
    /// Samples in window pixels, in capture order
    pub points: Vec<Vec2>,
    /// Pointer position at release
    pub release: Vec2,
}

/// Records the pointer once per frame while the draw button is held
///
/// Consecutive duplicate samples are kept.
#[derive(Clone, Debug, Default)]
pub struct SketchCapture {
    pointer: Vec2,
    held: PointerButtons,
    points: Vec<Vec2>,
}

impl SketchCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track the latest cursor position
    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// Note a button press; nothing is recorded until the next sample
    pub fn button_pressed(&mut self, buttons: PointerButtons) {
        self.held |= buttons;
    }

    /// Per-frame poll: append the cursor position if drawing
    pub fn sample(&mut self) {
        if self.is_drawing() {
            self.points.push(self.pointer);
        }
    }

    /// Release buttons, returning the stroke if the draw button was held
    ///
    /// The capture is empty afterwards.
    pub fn button_released(&mut self, buttons: PointerButtons) -> Option<CompletedStroke> {
        let was_drawing = self.is_drawing();
        self.held.remove(buttons);
        if !was_drawing || self.is_drawing() {
            return None;
        }

        Some(CompletedStroke {
            points: std::mem::take(&mut self.points),
            release: self.pointer,
        })
    }

    pub fn is_drawing(&self) -> bool {
        self.held.contains(PointerButtons::PRIMARY)
    }

    /// Samples of the stroke in progress
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Drop the stroke in progress
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_only_while_primary_held() {
        let mut capture = SketchCapture::new();
        capture.pointer_moved(Vec2::new(1.0, 1.0));
        capture.sample();
        assert!(capture.points().is_empty());

        capture.button_pressed(PointerButtons::SECONDARY);
        capture.sample();
        assert!(capture.points().is_empty());

        capture.button_pressed(PointerButtons::PRIMARY);
        assert!(capture.points().is_empty(), "press alone records nothing");
        capture.sample();
        capture.sample();
        assert_eq!(capture.points(), &[Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0)]);
    }

    #[test]
    fn test_release_returns_stroke_and_clears() {
        let mut capture = SketchCapture::new();
        capture.button_pressed(PointerButtons::PRIMARY);
        capture.pointer_moved(Vec2::new(10.0, 20.0));
        capture.sample();
        capture.pointer_moved(Vec2::new(30.0, 40.0));
        capture.sample();

        let stroke = capture.button_released(PointerButtons::PRIMARY).expect("stroke");
        assert_eq!(stroke.points, vec![Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0)]);
        assert_eq!(stroke.release, Vec2::new(30.0, 40.0));
        assert!(capture.points().is_empty());
        assert!(!capture.is_drawing());
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut capture = SketchCapture::new();
        assert!(capture.button_released(PointerButtons::PRIMARY).is_none());

        capture.button_pressed(PointerButtons::PRIMARY | PointerButtons::SECONDARY);
        capture.sample();
        assert!(capture.button_released(PointerButtons::SECONDARY).is_none());
        assert_eq!(capture.points().len(), 1);
    }
}
