//! Game loop controller
//!
//! Owns the game state, the spawn timer and the RNG. Each call to
//! [`Game::step`] is one tick: drain input, apply timer firings, advance the
//! simulation, then render. The window host decides when ticks happen.

use std::time::Duration;

use log::info;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::platform::{InputEvent, InputSource, IntervalTimer, Key};
use crate::renderer::{RenderError, Surface, compose};
use crate::sim::{Command, GameState, TickInput, TickReport, tick};

/// Whether the host should keep running after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// The game loop controller
pub struct Game<R = Pcg32> {
    state: GameState,
    spawn_timer: IntervalTimer,
    rng: R,
    last_report: TickReport,
}

impl Game<Pcg32> {
    /// New game with a seeded RNG
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            state: GameState::new(config),
            spawn_timer: IntervalTimer::new(config.spawn_interval),
            rng,
            last_report: TickReport::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// What the most recent tick did
    pub fn last_report(&self) -> TickReport {
        self.last_report
    }

    /// Run one tick. `elapsed` is the wall time since the previous tick and
    /// only drives the spawn timer.
    ///
    /// A close request still finishes the tick (update and render) before
    /// returning [`LoopControl::Exit`].
    pub fn step<I, S>(
        &mut self,
        elapsed: Duration,
        input: &mut I,
        surface: &mut S,
    ) -> Result<LoopControl, RenderError>
    where
        I: InputSource + ?Sized,
        S: Surface + ?Sized,
    {
        let mut control = LoopControl::Continue;
        let mut tick_input = TickInput::default();

        for event in input.drain_events() {
            match event {
                InputEvent::CloseRequested => {
                    info!("Close requested");
                    control = LoopControl::Exit;
                }
                InputEvent::KeyDown(Key::Restart) => tick_input.commands.push(Command::Restart),
                InputEvent::KeyDown(Key::Left | Key::Right) => {}
            }
        }

        let fired = self.spawn_timer.advance(elapsed);
        tick_input
            .commands
            .extend(std::iter::repeat_n(Command::Spawn, fired as usize));

        let held = input.held_keys();
        tick_input.left = held.left;
        tick_input.right = held.right;

        self.last_report = tick(&mut self.state, &tick_input, &mut self.rng);

        surface.present(&compose(&self.state))?;

        Ok(control)
    }
}
