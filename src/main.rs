//! Crayon Physics
//!
//! Draw with the left mouse button: strokes become circles, boxes or static
//! background lines depending on the mode picked from the menu strip at the
//! top of the window. Right-drag orbits the camera, A/Z zoom.

mod input;
mod systems;

use crayon::config;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use crayon_core::{commit, PointerButtons, SketchOutcome, SketchSession, Vec2};
use crayon_input::{CameraManipulator, InputState, TurntableManipulator};
use crayon_physics::PhysicsWorld;
use crayon_render::{Camera, RenderStyle};

use config::AppConfig;
use input::{InputAction, InputMapper};
use systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};

/// Main application state
struct App {
    config: AppConfig,
    window_system: Option<WindowSystem>,
    render_system: Option<RenderSystem>,
    simulation: SimulationSystem,
    world: PhysicsWorld,
    session: SketchSession,
    manipulator: TurntableManipulator,
    input: InputState,
    camera: Camera,
    style: RenderStyle,
}

impl App {
    fn new() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let world = PhysicsWorld::with_config(config.physics.to_physics_config());
        let session = SketchSession::new(
            config.sketch.to_menu_layout(),
            config.sketch.to_projector(),
            config.sketch.to_classifier_config(),
        );
        let manipulator =
            TurntableManipulator::with_settings(config.input.to_turntable_settings())
                .with_distance(config.camera.distance);
        let camera = Camera::new(config.camera.fov, config.camera.near, config.camera.far)
            .with_frame(manipulator.compute_frame());
        let style = config.rendering.to_render_style(&config.sketch);

        log::info!(
            "Gravity {:.2}, timestep {:.4}s, starting mode {}",
            world.gravity().y,
            world.config().timestep,
            session.mode()
        );

        Self {
            config,
            window_system: None,
            render_system: None,
            simulation: SimulationSystem::new(),
            world,
            session,
            manipulator,
            input: InputState::new(),
            camera,
            style,
        }
    }

    fn handle_stroke_end(&mut self, buttons: PointerButtons) {
        let Some(window_system) = &self.window_system else {
            return;
        };
        let viewport = window_system.viewport();

        let outcome = self.session.button_released(buttons, &self.camera, viewport);
        if let Some(SketchOutcome::Shape(request)) = outcome {
            commit(&request, &mut self.world);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.session.sample();

        let snapshot = self.input.snapshot();
        self.simulation
            .update(&mut self.world, &mut self.manipulator, &snapshot);
        self.camera.frame = self.manipulator.compute_frame();

        if let Some(render_system) = &mut self.render_system {
            let result = render_system.render_frame(
                &self.camera,
                &self.world,
                &self.session,
                &self.style,
                self.config.debug.show_menu,
            );
            match result {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render_system.reconfigure(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("Surface error: {}", e),
            }
        }

        if let Some(window_system) = &self.window_system {
            if self.config.debug.title_stats {
                window_system.update_title(
                    self.session.mode(),
                    self.world.body_count(),
                    self.world.elapsed(),
                );
            }
            window_system.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_some() {
            return;
        }

        let window_system = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window_system) => window_system,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(
            window_system.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render_system) => self.render_system = Some(render_system),
            Err(e) => {
                log::error!("Failed to initialise rendering: {}", e);
                event_loop.exit();
                return;
            }
        }

        window_system.request_redraw();
        self.window_system = Some(window_system);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render_system) = &mut self.render_system {
                    render_system.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => {
                            event_loop.exit();
                            return;
                        }
                        Some(InputAction::ResetWorld) => self.world.clear(),
                        Some(InputAction::ReloadShaders) => {
                            if let Some(render_system) = &mut self.render_system {
                                render_system.reload_shader();
                            }
                        }
                        None => {}
                    }
                    self.input.process_keyboard(key, event.state);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.process_cursor_moved(position.x, position.y);
                self.session
                    .pointer_moved(Vec2::new(position.x as f32, position.y as f32));
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.input.process_mouse_button(button, state);
                let buttons = PointerButtons::from_mouse_button(button);
                match state {
                    ElementState::Pressed => self.session.button_pressed(buttons),
                    ElementState::Released => self.handle_stroke_end(buttons),
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
