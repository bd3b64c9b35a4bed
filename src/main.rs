//! Dialkit - analog clock face
//!
//! Renders an analog clock face driven by the local wall clock and
//! refreshes itself roughly once per second.

mod config;
mod systems;

use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowId,
};

use dialkit_core::{Color, SystemClock, Theme, TimeSource};
use dialkit_math::DialLayout;
use dialkit_render::{
    build_face,
    context::RenderContext,
    pipeline::{FacePipeline, FaceUniforms},
};

use config::AppConfig;
use systems::WindowSystem;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// Resolved face colors
    theme: Theme,
    /// Wall-clock source driving the hands
    clock: SystemClock,
    window_system: Option<WindowSystem>,
    render_context: Option<RenderContext>,
    face_pipeline: Option<FacePipeline>,
    /// Deadline for the next scheduled draw
    next_draw: Instant,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        Self::with_config(config)
    }

    fn with_config(config: AppConfig) -> Self {
        let theme = config.clock.theme();

        Self {
            config,
            theme,
            clock: SystemClock,
            window_system: None,
            render_context: None,
            face_pipeline: None,
            next_draw: Instant::now(),
        }
    }

    /// Delay between scheduled redraws
    fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.config.clock.refresh_ms)
    }

    /// Draw one frame: snapshot the time, tessellate, render, present
    fn draw(&mut self, event_loop: &ActiveEventLoop) {
        let time = self.clock.now();

        let Some(ctx) = self.render_context.as_mut() else {
            return;
        };
        let Some(pipeline) = self.face_pipeline.as_mut() else {
            return;
        };
        let Some(window_system) = self.window_system.as_ref() else {
            return;
        };

        // Layout follows the current surface size
        let viewport = ctx.viewport();
        let layout = DialLayout::new(viewport[0], viewport[1]);
        let face = build_face(&layout, &self.theme, &time);

        pipeline.update_uniforms(&ctx.queue, &FaceUniforms::new(viewport));
        pipeline.upload_vertices(&ctx.device, &ctx.queue, &face.vertices);

        // Get surface texture
        let output = match ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => {
                ctx.resize(ctx.size);
                window_system.request_redraw();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::warn!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Face Encoder"),
            });

        pipeline.render(&mut encoder, &view, background(self.theme.secondary));

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        window_system.update_title(&time);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window_system.is_none() {
            let window_system = WindowSystem::create(event_loop, &self.config.window)
                .expect("Failed to create window");

            // Create render context
            let render_context = pollster::block_on(RenderContext::new(
                window_system.window().clone(),
                self.config.window.vsync,
            ));

            // Create the face pipeline
            let mut face_pipeline = FacePipeline::new(
                &render_context.device,
                render_context.config.format,
                self.config.rendering.sample_count,
            );
            face_pipeline.ensure_msaa_target(
                &render_context.device,
                render_context.config.width,
                render_context.config.height,
            );

            log::info!(
                "Clock face ready ({}x{}, {} ms refresh)",
                render_context.config.width,
                render_context.config.height,
                self.config.clock.refresh_ms,
            );

            self.window_system = Some(window_system);
            self.render_context = Some(render_context);
            self.face_pipeline = Some(face_pipeline);
            self.next_draw = Instant::now();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
                if let (Some(ctx), Some(face_pipeline)) =
                    (&self.render_context, &mut self.face_pipeline)
                {
                    face_pipeline.ensure_msaa_target(
                        &ctx.device,
                        ctx.config.width,
                        ctx.config.height,
                    );
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.state == ElementState::Pressed {
                        match key {
                            KeyCode::Escape => {
                                event_loop.exit();
                            }
                            KeyCode::KeyF => {
                                if let Some(window_system) = &self.window_system {
                                    window_system.toggle_fullscreen();
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.draw(event_loop);

                // Re-arm the refresh deadline after every draw
                self.next_draw = Instant::now() + self.refresh_interval();
                event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_draw));
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(window_system) = &self.window_system {
            if Instant::now() >= self.next_draw {
                window_system.request_redraw();
            } else {
                event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_draw));
            }
        }
    }
}

/// Convert a theme color to the wgpu clear color
fn background(color: Color) -> wgpu::Color {
    wgpu::Color {
        r: color.r as f64,
        g: color.g as f64,
        b: color.b as f64,
        a: color.a as f64,
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Dialkit");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now()));

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_interval_default() {
        let app = App::with_config(AppConfig::default());
        assert_eq!(app.refresh_interval(), Duration::from_millis(1000));
    }

    #[test]
    fn test_refresh_interval_follows_config() {
        let mut config = AppConfig::default();
        config.clock.refresh_ms = 250;
        let app = App::with_config(config);
        assert_eq!(app.refresh_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_background_conversion() {
        let bg = background(Color::rgb(1.0, 0.5, 0.0));
        assert_eq!(bg.r, 1.0);
        assert!((bg.g - 0.5).abs() < 1e-6);
        assert_eq!(bg.a, 1.0);
    }
}
