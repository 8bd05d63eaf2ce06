//! Fixed timestep simulation tick
//!
//! One call to [`tick`] is one frame of gameplay: queued commands are applied
//! in order, then (unless the game is over) the player moves, obstacles fall,
//! off-screen obstacles are swept, the score goes up and collisions are
//! checked.

use log::{debug, info};
use rand::Rng;

use super::state::{GamePhase, GameState, Obstacle};

/// Discrete commands delivered to the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Spawn timer fired
    Spawn,
    /// Restart key pressed
    Restart,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Commands in arrival order
    pub commands: Vec<Command>,
    /// Left arrow held
    pub left: bool,
    /// Right arrow held
    pub right: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Obstacles spawned this tick
    pub spawned: u32,
    /// A restart was applied this tick
    pub restarted: bool,
    /// Index of the obstacle that ended the run, if one did
    pub collision: Option<usize>,
}

/// Apply one command. Returns true if it changed the state.
///
/// Spawns are dropped while the game is over; restarts are dropped while it
/// is running.
pub fn handle_command<R: Rng>(state: &mut GameState, command: Command, rng: &mut R) -> bool {
    match (command, state.phase) {
        (Command::Spawn, GamePhase::Running) => {
            spawn_obstacle(state, rng);
            true
        }
        (Command::Restart, GamePhase::GameOver) => {
            *state = GameState::new(state.config);
            info!("Game restarted");
            true
        }
        _ => false,
    }
}

/// Append a new obstacle at a uniformly random column
pub fn spawn_obstacle<R: Rng>(state: &mut GameState, rng: &mut R) {
    let x = rng.random_range(0..=state.config.obstacle_max_x());
    state.obstacles.push(Obstacle::spawn(x, &state.config));
    debug!("Spawned obstacle at x={} ({} active)", x, state.obstacles.len());
}

/// Advance the game state by one frame
pub fn tick<R: Rng>(state: &mut GameState, input: &TickInput, rng: &mut R) -> TickReport {
    let mut report = TickReport::default();

    for &command in &input.commands {
        if handle_command(state, command, rng) {
            match command {
                Command::Spawn => report.spawned += 1,
                Command::Restart => report.restarted = true,
            }
        }
    }

    if state.phase == GamePhase::GameOver {
        return report;
    }

    let config = state.config;

    // Both arrows held cancel out
    let mut dx = 0;
    if input.left {
        dx -= config.player_speed;
    }
    if input.right {
        dx += config.player_speed;
    }
    state.player.shift(dx, config.player_max_x());

    for obstacle in &mut state.obstacles {
        obstacle.fall(config.obstacle_speed);
    }
    state.obstacles.retain(|o| o.y() < config.height);

    state.score += 1;

    if let Some(index) = state.first_collision() {
        state.phase = GamePhase::GameOver;
        report.collision = Some(index);
        info!("Game over - score {}", state.score);
    }

    report
}
