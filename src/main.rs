//! Pixel Peril entry point
//!
//! Opens the window, wires keyboard events into the game and drives one
//! frame per redraw.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use pixel_peril::consts::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use pixel_peril::renderer::RenderState;
use pixel_peril::{Flow, Game, Settings};

struct App {
    game: Game,
    window: Option<Arc<Window>>,
    render_state: Option<RenderState>,
    last_frame: Option<Instant>,
    /// Fatal error to report once the loop exits
    error: Option<anyhow::Error>,
}

impl App {
    fn new(game: Game) -> Self {
        Self {
            game,
            window: None,
            render_state: None,
            last_frame: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{:#}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(WINDOW_TITLE)
                    .with_inner_size(winit::dpi::PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                    .with_resizable(false),
            )
            .context("failed to create window")?;
        let window = Arc::new(window);

        let render_state = pollster::block_on(RenderState::new(window.clone()))
            .context("failed to initialize renderer")?;

        self.window = Some(window);
        self.render_state = Some(render_state);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        let dt = self
            .last_frame
            .map_or(0.0, |prev| now.duration_since(prev).as_secs_f32());
        self.last_frame = Some(now);

        if self.game.frame(dt) == Flow::Exit {
            event_loop.exit();
            return;
        }

        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };
        let scene = self.game.scene();
        let vertices = scene.tessellate(render_state.size);
        match render_state.render(&vertices, scene.clear) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = render_state.size;
                render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow::anyhow!("GPU out of memory"));
            }
            Err(e) => log::warn!("Skipping frame: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(render_state) = self.render_state.as_mut() {
                    render_state.resize(size.width, size.height);
                }
            }

            WindowEvent::Focused(false) => self.game.input.clear(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => self.game.input.key_down(code),
                ElementState::Released => self.game.input.key_up(code),
            },

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Pixel Peril starting...");

    let settings = Settings::load();
    let game = Game::new(&settings);
    log::info!("Seed: {}", game.state.seed);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(game);
    event_loop.run_app(&mut app).context("event loop failed")?;

    match app.error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
