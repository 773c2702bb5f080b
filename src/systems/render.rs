//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Scene and overlay pipelines, with shader reload
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use crayon_core::{SketchSession, Viewport};
use crayon_physics::PhysicsWorld;
use crayon_render::{
    build_overlay, build_world_mesh,
    context::{ContextError, RenderContext},
    pipeline::{RenderPipeline, RenderUniforms},
    shader::BUILTIN_SHADER,
    Camera, Mesh, RenderStyle, ShaderError, ShaderSource,
};
use crate::config::RenderingConfig;

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU context could not be created
    Context(ContextError),
    /// Shader failed to load or compile
    Shader(ShaderError),
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(e) => write!(f, "{}", e),
            RenderError::Shader(e) => write!(f, "{}", e),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(e) => Some(e),
            RenderError::Shader(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

impl From<ShaderError> for RenderError {
    fn from(e: ShaderError) -> Self {
        RenderError::Shader(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    pipeline: RenderPipeline,
    shader: ShaderSource,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;
        let shader = render_config.shader_source();

        let (width, height) = (context.config.width, context.config.height);
        let pipeline = match RenderPipeline::new(
            &context.device,
            context.config.format,
            width,
            height,
            &shader.initial(),
        ) {
            Ok(pipeline) => pipeline,
            Err(e) => {
                log::warn!("{}; falling back to the built-in shader", e);
                RenderPipeline::new(
                    &context.device,
                    context.config.format,
                    width,
                    height,
                    BUILTIN_SHADER,
                )?
            }
        };

        Ok(Self {
            context,
            pipeline,
            shader,
            render_config,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Reconfigure the surface after it was lost
    pub fn reconfigure(&mut self) {
        self.context.reconfigure();
    }

    /// Re-read the shader and rebuild the pipelines
    ///
    /// A failed reload keeps the previous pipelines.
    pub fn reload_shader(&mut self) {
        let result = self
            .shader
            .reload()
            .and_then(|source| self.pipeline.reload(&self.context.device, &source));
        match result {
            Ok(()) => log::info!("Shaders reloaded"),
            Err(e) => log::warn!("Shader reload failed, keeping previous shader: {}", e),
        }
    }

    /// Render a single frame
    pub fn render_frame(
        &mut self,
        camera: &Camera,
        world: &PhysicsWorld,
        session: &SketchSession,
        style: &RenderStyle,
        show_menu: bool,
    ) -> Result<(), RenderError> {
        let aspect = self.context.aspect_ratio();
        let scene_uniforms = RenderUniforms::lit(
            camera.view_projection(aspect),
            self.render_config.light_dir,
            self.render_config.ambient_strength,
            self.render_config.diffuse_strength,
        );

        let viewport = Viewport::new(
            self.context.config.width as f32,
            self.context.config.height as f32,
        );
        let overlay_uniforms = RenderUniforms::overlay(viewport.width, viewport.height);

        let scene = build_world_mesh(world, style);
        let overlay = if show_menu {
            build_overlay(session.menu(), session.mode(), session.current_path(), viewport, style)
        } else {
            let [r, g, b] = style.stroke_color;
            let mut overlay = Mesh::new();
            overlay.push_stroke(session.current_path(), style.stroke_width, [r, g, b, 1.0]);
            overlay
        };

        self.pipeline
            .update_scene_uniforms(&self.context.queue, &scene_uniforms);
        self.pipeline
            .update_overlay_uniforms(&self.context.queue, &overlay_uniforms);
        self.pipeline.upload(
            &self.context.device,
            &self.context.queue,
            &scene.vertices,
            &overlay.vertices,
        );

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => return Err(RenderError::SurfaceLost),
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(RenderError::SurfaceLost.to_string(), "Surface lost");
        assert_eq!(RenderError::OutOfMemory.to_string(), "Out of memory");
        assert_eq!(
            RenderError::Other("Timeout".to_string()).to_string(),
            "Render error: Timeout"
        );
    }

    #[test]
    fn test_render_error_from_context() {
        let err: RenderError = ContextError::NoAdapter.into();
        assert!(matches!(err, RenderError::Context(ContextError::NoAdapter)));
        assert_eq!(err.to_string(), "No compatible GPU adapter found");
        assert!(std::error::Error::source(&err).is_some());
    }
}
