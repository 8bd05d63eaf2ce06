//! Falling Obstacles - a single-screen dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, obstacles, collisions, score)
//! - `game`: Per-frame controller tying input, spawn timer, sim and rendering
//! - `renderer`: wgpu rendering of rectangles and bitmap text
//! - `platform`: Native window, keyboard and frame pacing

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, LoopControl};

/// Game configuration constants
pub mod consts {
    /// Window caption
    pub const WINDOW_TITLE: &str = "Falling Obstacles";

    /// Playfield dimensions in pixels
    pub const PLAYFIELD_WIDTH: i32 = 600;
    pub const PLAYFIELD_HEIGHT: i32 = 800;

    /// Target simulation/render rate
    pub const TARGET_FPS: u32 = 60;

    /// Player square
    pub const PLAYER_SIZE: i32 = 50;
    /// Horizontal pixels per tick while an arrow key is held
    pub const PLAYER_SPEED: i32 = 7;
    /// Gap between the player's bottom edge and the playfield bottom
    pub const PLAYER_BOTTOM_MARGIN: i32 = 20;

    /// Obstacle square
    pub const OBSTACLE_SIZE: i32 = 50;
    /// Vertical pixels per tick
    pub const OBSTACLE_SPEED: i32 = 5;
    /// Spawn a new obstacle every 0.8 seconds
    pub const OBSTACLE_SPAWN_MS: u64 = 800;

    /// Score and game-over text size
    pub const FONT_SIZE: u32 = 36;
    /// Top-left anchor of the score text
    pub const SCORE_TEXT_POS: (i32, i32) = (20, 20);
}
