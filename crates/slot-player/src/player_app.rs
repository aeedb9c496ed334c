//! Player application implementing winit ApplicationHandler
//!
//! Runs the cabinet loop: gamepad and keyboard input, fixed-step machine
//! frames, audio, and the egui overlay.

use crate::assets::SymbolImages;
use crate::gamepad::{Gamepads, PadEvent};
use crate::hud::{self, SymbolTextures};
use crate::render::RenderContext;
use anyhow::Context;
use slot_audio::AudioSystem;
use slot_runtime::{GameClock, InputSource, SlotEvent, SlotMachine};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Icon, Window, WindowId};

pub struct PlayerApp {
    // Core state
    pub machine: SlotMachine,
    pub clock: GameClock,

    // Systems
    pub audio: AudioSystem,
    gamepads: Gamepads,
    pending: Vec<InputSource>,

    // Rendering
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    egui_ctx: egui::Context,
    egui_winit: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    textures: SymbolTextures,
    icon: Option<Icon>,

    error: Option<anyhow::Error>,
}

impl PlayerApp {
    pub fn new(
        mut machine: SlotMachine,
        audio: AudioSystem,
        gamepads: Gamepads,
        images: &SymbolImages,
        icon: Icon,
    ) -> Self {
        for id in gamepads.connected() {
            machine.connect_gamepad(id);
        }
        let clock = GameClock::with_fixed_timestep(machine.config().display.frame_rate);
        let egui_ctx = egui::Context::default();
        let textures = SymbolTextures::upload(&egui_ctx, images);

        Self {
            machine,
            clock,
            audio,
            gamepads,
            pending: Vec::new(),
            window: None,
            render_context: None,
            egui_ctx,
            egui_winit: None,
            egui_renderer: None,
            textures,
            icon: Some(icon),
            error: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let display = &self.machine.config().display;
        let window_attrs = Window::default_attributes()
            .with_title("Slot Machine")
            .with_inner_size(LogicalSize::new(display.width, display.height))
            .with_resizable(false)
            .with_window_icon(self.icon.take());

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .context("Failed to create window")?,
        );

        if display.fullscreen {
            window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        let render_context = pollster::block_on(RenderContext::new(window.clone()))
            .context("Failed to initialize render context")?;

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );

        let egui_renderer = egui_wgpu::Renderer::new(
            &render_context.device,
            render_context.config.format,
            None,
            1,
            false,
        );

        self.window = Some(window);
        self.render_context = Some(render_context);
        self.egui_winit = Some(egui_winit);
        self.egui_renderer = Some(egui_renderer);
        Ok(())
    }

    fn poll_gamepads(&mut self) {
        for event in self.gamepads.poll() {
            match event {
                PadEvent::Connected(id) => self.machine.connect_gamepad(id),
                PadEvent::Disconnected(id) => self.machine.disconnect_gamepad(id),
                PadEvent::SpinPressed(id) => self.pending.push(InputSource::Gamepad(id)),
            }
        }
    }

    fn tick(&mut self) {
        // Advance game clock
        self.clock.tick();
        self.poll_gamepads();

        // Fixed-timestep machine frames; triggers go to the first one
        while self.clock.should_fixed_update() {
            let triggers = std::mem::take(&mut self.pending);
            self.machine.frame(self.clock.step_ms(), &triggers);
            self.clock.consume_fixed_step();
        }

        let events = self.machine.drain_events();
        for event in &events {
            if let SlotEvent::Win { rows, payout } = event {
                log::debug!("Presenting win on rows {rows:?} (+{payout})");
            }
        }
        self.audio.update(&events, self.clock.now_ms());
    }

    fn render(&mut self) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(context) = &self.render_context else {
            return;
        };
        let Some(egui_winit) = &mut self.egui_winit else {
            return;
        };
        let Some(egui_renderer) = &mut self.egui_renderer else {
            return;
        };

        let output = match context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                context.surface.configure(&context.device, &context.config);
                return;
            }
            Err(e) => {
                log::error!("Surface error: {e:?}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let now = self.clock.step_ms();
        let raw_input = egui_winit.take_egui_input(&window);
        let machine = &self.machine;
        let textures = &self.textures;
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            hud::paint(ctx, machine, textures, now);
        });

        egui_winit.handle_platform_output(&window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [context.config.width, context.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui Encoder"),
            });

        for (id, image_delta) in &full_output.textures_delta.set {
            egui_renderer.update_texture(&context.device, &context.queue, *id, image_delta);
        }

        egui_renderer.update_buffers(
            &context.device,
            &context.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        context.queue.submit(std::iter::once(encoder.finish()));

        for id in &full_output.textures_delta.free {
            egui_renderer.free_texture(id);
        }

        output.present();
    }
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.initialize(event_loop) {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let (Some(window), Some(egui_winit)) = (&self.window, &mut self.egui_winit) {
            let _ = egui_winit.on_window_event(window, &event);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(context) = &mut self.render_context {
                    context.resize(new_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                    PhysicalKey::Code(KeyCode::Space) => self.pending.push(InputSource::Keyboard),
                    _ => {}
                }
            }

            WindowEvent::RedrawRequested => {
                self.tick();
                self.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.audio.shutdown();
        log::info!("Final score: {}", self.machine.state().score);
    }
}
