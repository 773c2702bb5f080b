//! Sketch modes and the menu strip

use crayon_math::Vec2;
use std::fmt;

/// How the next committed stroke is interpreted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SketchMode {
    /// Static polyline the other shapes collide with
    #[default]
    Background,
    /// Dynamic circle
    Circle,
    /// Dynamic box
    Box,
}

impl SketchMode {
    /// Modes in menu order, left to right
    pub const ALL: [SketchMode; 3] = [SketchMode::Background, SketchMode::Circle, SketchMode::Box];
}

impl fmt::Display for SketchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchMode::Background => write!(f, "background"),
            SketchMode::Circle => write!(f, "circle"),
            SketchMode::Box => write!(f, "box"),
        }
    }
}

/// Menu strip along the top of the window, in fractions of the window size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuLayout {
    /// Releases above this y-fraction hit the menu
    pub strip_height: f32,
    /// Left edge of the circle cell
    pub circle_start: f32,
    /// Left edge of the box cell
    pub box_start: f32,
}

impl Default for MenuLayout {
    fn default() -> Self {
        Self {
            strip_height: 0.15,
            circle_start: 0.33,
            box_start: 0.66,
        }
    }
}

impl MenuLayout {
    /// Convert a pixel position into window fractions
    ///
    /// A zero-sized axis maps to 0 so degenerate windows land in the menu.
    pub fn to_fraction(position: Vec2, window_size: Vec2) -> Vec2 {
        let frac = |v: f32, size: f32| if size > 0.0 { v / size } else { 0.0 };
        Vec2::new(frac(position.x, window_size.x), frac(position.y, window_size.y))
    }

    /// Mode picked by a release at `fraction`, or `None` outside the strip
    pub fn select(&self, fraction: Vec2) -> Option<SketchMode> {
        if fraction.y >= self.strip_height {
            return None;
        }

        let mode = if fraction.x < self.circle_start {
            SketchMode::Background
        } else if fraction.x < self.box_start {
            SketchMode::Circle
        } else {
            SketchMode::Box
        };
        Some(mode)
    }

    /// Horizontal span `(start, end)` of a mode's cell
    pub fn cell(&self, mode: SketchMode) -> (f32, f32) {
        match mode {
            SketchMode::Background => (0.0, self.circle_start),
            SketchMode::Circle => (self.circle_start, self.box_start),
            SketchMode::Box => (self.box_start, 1.0),
        }
    }
}
