//! Frozen face
//!
//! The clock window driven by a frozen time source instead of the wall
//! clock, holding the classic 10:08:42 watch pose.
//!
//! This demo demonstrates:
//! - Creating a window with winit
//! - Setting up the face pipeline
//! - Substituting the wall clock through the TimeSource seam
//!
//! Run with: `cargo run --example frozen_face`

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use dialkit_core::{ClockTime, FixedTime, Theme, TimeSource};
use dialkit_math::DialLayout;
use dialkit_render::{
    build_face,
    context::RenderContext,
    pipeline::{FacePipeline, FaceUniforms},
};

/// Application state
struct App {
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    face_pipeline: Option<FacePipeline>,
    theme: Theme,
    clock: FixedTime,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            render_context: None,
            face_pipeline: None,
            theme: Theme::default(),
            clock: FixedTime(ClockTime::new(10, 8, 42)),
        }
    }

    fn draw(&mut self, event_loop: &ActiveEventLoop) {
        let time = self.clock.now();

        let Some(ctx) = self.render_context.as_mut() else {
            return;
        };
        let Some(pipeline) = self.face_pipeline.as_mut() else {
            return;
        };

        let viewport = ctx.viewport();
        let layout = DialLayout::new(viewport[0], viewport[1]);
        let face = build_face(&layout, &self.theme, &time);

        pipeline.update_uniforms(&ctx.queue, &FaceUniforms::new(viewport));
        pipeline.upload_vertices(&ctx.device, &ctx.queue, &face.vertices);

        let output = match ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => {
                ctx.resize(ctx.size);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
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
                label: Some("Frozen Face Encoder"),
            });

        let bg = self.theme.secondary;
        pipeline.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg.r as f64,
                g: bg.g as f64,
                b: bg.b as f64,
                a: bg.a as f64,
            },
        );

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = Arc::new(
                event_loop
                    .create_window(
                        Window::default_attributes()
                            .with_title("Frozen face - 10:08:42")
                            .with_inner_size(winit::dpi::LogicalSize::new(420, 420)),
                    )
                    .expect("Failed to create window"),
            );

            let render_context = pollster::block_on(RenderContext::new(window.clone(), true));

            let mut face_pipeline =
                FacePipeline::new(&render_context.device, render_context.config.format, 4);
            face_pipeline.ensure_msaa_target(
                &render_context.device,
                render_context.config.width,
                render_context.config.height,
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.face_pipeline = Some(face_pipeline);
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

            WindowEvent::RedrawRequested => {
                self.draw(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    env_logger::init();

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
