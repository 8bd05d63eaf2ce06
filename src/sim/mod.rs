//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per call, no wall-clock reads
//! - Randomness only through the caller's RNG
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{GamePhase, GameState, Obstacle, Player};
pub use tick::{Command, TickInput, TickReport, handle_command, spawn_obstacle, tick};
