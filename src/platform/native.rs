//! Native host: winit window, wgpu surface and fixed-rate pacing
//!
//! The event loop sleeps until the frame limiter's next deadline, then runs
//! one game tick. Window events arriving in between are queued into
//! [`KeyboardInput`] and drained by the tick.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use glam::Vec2;
use log::{error, info};
use thiserror::Error;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::{FrameLimiter, KeyboardInput};
use crate::config::{ConfigError, GameConfig};
use crate::game::{Game, LoopControl};
use crate::renderer::{RenderError, RenderInitError, RenderState};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to create event loop: {0}")]
    CreateEventLoop(#[source] EventLoopError),
    #[error("event loop failed: {0}")]
    EventLoopRun(#[source] EventLoopError),
    #[error("failed to create window: {0}")]
    CreateWindow(#[source] OsError),
    #[error("failed to initialize renderer: {0}")]
    RenderInit(#[from] RenderInitError),
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Window and renderer, created once the event loop is running
struct Host {
    window: Arc<Window>,
    render: RenderState,
    limiter: FrameLimiter,
}

struct App {
    config: GameConfig,
    game: Game,
    input: KeyboardInput,
    host: Option<Host>,
    error: Option<AppError>,
}

impl App {
    fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            game: Game::new(config, seed),
            input: KeyboardInput::new(),
            host: None,
            error: None,
        }
    }

    /// Record a fatal error and stop the loop
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }

    fn create_host(&self, event_loop: &ActiveEventLoop) -> Result<Host, AppError> {
        let attributes = Window::default_attributes()
            .with_title(self.config.title)
            .with_inner_size(LogicalSize::new(
                self.config.width as f64,
                self.config.height as f64,
            ))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .map_err(AppError::CreateWindow)?,
        );
        let size = window.inner_size();
        info!("Window created: {}x{}", size.width, size.height);

        let playfield = Vec2::new(self.config.width as f32, self.config.height as f32);
        let render = pollster::block_on(RenderState::for_window(window.clone(), playfield))?;

        Ok(Host {
            window,
            render,
            limiter: FrameLimiter::new(self.config.fps, Instant::now()),
        })
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.host.is_some() {
            return;
        }
        match self.create_host(event_loop) {
            Ok(host) => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(host.limiter.deadline()));
                self.host = Some(host);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(host) = self.host.as_mut() else {
            return;
        };
        if window_id != host.window.id() {
            return;
        }
        match event {
            WindowEvent::CloseRequested => self.input.push_close(),
            WindowEvent::KeyboardInput { event, .. } => {
                self.input
                    .handle_key(event.physical_key, event.state, event.repeat);
            }
            WindowEvent::Focused(false) => self.input.release_all(),
            WindowEvent::Resized(size) => host.render.resize(size.width, size.height),
            WindowEvent::Destroyed => event_loop.exit(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(host) = self.host.as_mut() else {
            return;
        };

        let now = Instant::now();
        if host.limiter.is_due(now) {
            let elapsed = host.limiter.tick(now);
            match self.game.step(elapsed, &mut self.input, &mut host.render) {
                Ok(LoopControl::Continue) => {}
                Ok(LoopControl::Exit) => {
                    event_loop.exit();
                    return;
                }
                Err(err) => {
                    self.fail(event_loop, err.into());
                    return;
                }
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(host.limiter.deadline()));
    }
}

/// Seed from the wall clock so every launch plays differently
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Open the window and run until it is closed
pub fn run(config: GameConfig) -> Result<(), AppError> {
    config.validate()?;

    let seed = time_seed();
    info!("Game initialized with seed: {}", seed);

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let mut app = App::new(config, seed);
    event_loop
        .run_app(&mut app)
        .map_err(AppError::EventLoopRun)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => {
            info!("Exited cleanly, final score {}", app.game.state().score);
            Ok(())
        }
    }
}
