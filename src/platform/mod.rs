//! Platform abstraction layer
//!
//! Separates the game controller from the window system:
//! - Input events and held-key state (`input`)
//! - Spawn cadence and frame pacing (`time`)
//! - The winit/wgpu host that drives everything (`native`)

pub mod input;
pub mod native;
pub mod time;

pub use input::{HeldKeys, InputEvent, Key, KeyboardInput};
pub use time::{FrameLimiter, IntervalTimer};

/// Source of player input, polled once per tick
///
/// The native implementation is fed by winit; tests substitute a scripted
/// queue.
pub trait InputSource {
    /// Take every event queued since the previous call, oldest first
    fn drain_events(&mut self) -> Vec<InputEvent>;

    /// Keys currently held down
    fn held_keys(&self) -> HeldKeys;
}
