//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CRAYON_SECTION__KEY`)

use crayon_core::{ClassifierConfig, MenuLayout, PathProjector};
use crayon_input::TurntableSettings;
use crayon_physics::PhysicsMaterial;
use crayon_render::{RenderStyle, ShaderSource};
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Physics configuration
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Sketch classification and menu layout
    #[serde(default)]
    pub sketch: SketchConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CRAYON_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // CRAYON_PHYSICS__GRAVITY=-3 -> physics.gravity = -3.0
        figment = figment.merge(Env::prefixed("CRAYON_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Allow the user to resize the window
    pub resizable: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Crayon Physics".to_string(),
            width: 960,
            height: 720,
            resizable: false,
            vsync: true,
        }
    }
}

/// Camera lens and starting turntable position
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Starting distance from the orbit center
    pub distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 60.0,
            near: 0.1,
            far: 1000.0,
            distance: 10.0,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Radians of orbit per pixel of right-drag
    pub rotate_speed: f32,
    /// Distance factor per second of held zoom key
    pub zoom_rate: f32,
    /// Radians kept between the pitch and the poles
    pub pitch_margin: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        let settings = TurntableSettings::default();
        Self {
            rotate_speed: settings.rotate_speed,
            zoom_rate: settings.zoom_rate,
            pitch_margin: settings.pitch_margin,
        }
    }
}

impl InputConfig {
    pub fn to_turntable_settings(&self) -> TurntableSettings {
        TurntableSettings {
            rotate_speed: self.rotate_speed,
            zoom_rate: self.zoom_rate,
            pitch_margin: self.pitch_margin,
        }
    }
}

/// Physics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity (negative = downward)
    pub gravity: f32,
    /// Fixed simulated seconds per frame
    pub timestep: f32,
    /// Velocity solver iterations
    pub velocity_iterations: usize,
    /// Position solver iterations
    pub position_iterations: usize,
    /// Collider density
    pub density: f32,
    /// Collider friction
    pub friction: f32,
    /// Collider restitution
    pub restitution: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let defaults = crayon_physics::PhysicsConfig::default();
        Self {
            gravity: defaults.gravity,
            timestep: defaults.timestep,
            velocity_iterations: defaults.velocity_iterations,
            position_iterations: defaults.position_iterations,
            density: defaults.material.density,
            friction: defaults.material.friction,
            restitution: defaults.material.restitution,
        }
    }
}

impl PhysicsConfig {
    /// Convert to the physics engine's config
    pub fn to_physics_config(&self) -> crayon_physics::PhysicsConfig {
        crayon_physics::PhysicsConfig::new(self.gravity)
            .with_timestep(self.timestep)
            .with_iterations(self.velocity_iterations, self.position_iterations)
            .with_material(PhysicsMaterial::new(self.density, self.friction, self.restitution))
    }
}

/// Sketch classification and menu layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Strokes with a bounding-box diagonal at least this long are dropped
    pub max_extent: f32,
    /// Minimum spacing between background polyline points
    pub min_segment: f32,
    /// Half-depth of rendered boxes
    pub box_depth: f32,
    /// Depth of the sketch plane
    pub plane_depth: f32,
    /// Height of the menu strip as a fraction of the window
    pub menu_height: f32,
    /// Left edge of the circle cell as a fraction of the window
    pub circle_start: f32,
    /// Left edge of the box cell as a fraction of the window
    pub box_start: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        let classifier = ClassifierConfig::default();
        let menu = MenuLayout::default();
        Self {
            max_extent: classifier.max_extent,
            min_segment: classifier.min_segment,
            box_depth: RenderStyle::default().box_depth,
            plane_depth: 0.0,
            menu_height: menu.strip_height,
            circle_start: menu.circle_start,
            box_start: menu.box_start,
        }
    }
}

impl SketchConfig {
    pub fn to_classifier_config(&self) -> ClassifierConfig {
        ClassifierConfig {
            max_extent: self.max_extent,
            min_segment: self.min_segment,
        }
    }

    pub fn to_menu_layout(&self) -> MenuLayout {
        MenuLayout {
            strip_height: self.menu_height,
            circle_start: self.circle_start,
            box_start: self.box_start,
        }
    }

    pub fn to_projector(&self) -> PathProjector {
        PathProjector::new(self.plane_depth)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Light direction [x, y, z]
    pub light_dir: [f32; 3],
    /// Ambient light strength
    pub ambient_strength: f32,
    /// Diffuse light strength
    pub diffuse_strength: f32,
    /// WGSL file overriding the built-in shader (re-read on reload)
    pub shader_path: Option<PathBuf>,
    /// Background ribbon thickness in world units
    pub ribbon_thickness: f32,
    /// Background ribbon depth along z
    pub ribbon_depth: f32,
    /// Sphere tessellation
    pub sphere_stacks: u32,
    pub sphere_slices: u32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let style = RenderStyle::default();
        Self {
            background_color: [0.2, 0.2, 0.2, 1.0],
            light_dir: [0.3, 1.0, 0.6],
            ambient_strength: 0.35,
            diffuse_strength: 0.65,
            shader_path: None,
            ribbon_thickness: style.ribbon_thickness,
            ribbon_depth: style.ribbon_depth,
            sphere_stacks: style.sphere_stacks,
            sphere_slices: style.sphere_slices,
        }
    }
}

impl RenderingConfig {
    /// Style for scene and overlay meshes
    pub fn to_render_style(&self, sketch: &SketchConfig) -> RenderStyle {
        RenderStyle {
            box_depth: sketch.box_depth,
            ribbon_thickness: self.ribbon_thickness,
            ribbon_depth: self.ribbon_depth,
            sphere_stacks: self.sphere_stacks,
            sphere_slices: self.sphere_slices,
            ..RenderStyle::default()
        }
    }

    pub fn shader_source(&self) -> ShaderSource {
        ShaderSource::new(self.shader_path.clone())
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Draw the menu strip
    pub show_menu: bool,
    /// Show mode, body count and simulated time in the window title
    pub title_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            show_menu: true,
            title_stats: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 960);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.physics.gravity, -9.8);
        assert_eq!(config.sketch.max_extent, 100.0);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("gravity"));
        assert!(toml.contains("menu_height"));
    }

    #[test]
    fn test_physics_conversion() {
        let physics = PhysicsConfig::default().to_physics_config();
        assert_eq!(physics, crayon_physics::PhysicsConfig::default());
    }

    #[test]
    fn test_sketch_conversion() {
        let sketch = SketchConfig::default();
        assert_eq!(sketch.to_classifier_config(), ClassifierConfig::default());
        assert_eq!(sketch.to_menu_layout(), MenuLayout::default());
        assert_eq!(sketch.to_projector(), PathProjector::default());
        // Box depth is render-only and feeds the render style
        assert_eq!(sketch.box_depth, RenderStyle::default().box_depth);
    }

    #[test]
    fn test_render_style_conversion() {
        let config = AppConfig::default();
        let style = config.rendering.to_render_style(&config.sketch);
        assert_eq!(style, RenderStyle::default());
        assert_eq!(config.rendering.shader_source(), ShaderSource::default());
    }
}
