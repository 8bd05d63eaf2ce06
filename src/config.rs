//! Game configuration
//!
//! Every tunable lives in one `Copy` struct so the simulation and tests can
//! run against playfields other than the shipped one.

use std::time::Duration;

use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("playfield must be at least 1x1, got {width}x{height}")]
    EmptyPlayfield { width: i32, height: i32 },
    #[error("{what} size must be positive, got {size}")]
    NonPositiveSize { what: &'static str, size: i32 },
    #[error("{what} of size {size} does not fit a {width}px wide playfield")]
    TooWide {
        what: &'static str,
        size: i32,
        width: i32,
    },
    #[error("player of size {size} plus margin {margin} does not fit a {height}px tall playfield")]
    TooTall { size: i32, margin: i32, height: i32 },
    #[error("target frame rate must be non-zero")]
    ZeroFrameRate,
}

/// Game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub title: &'static str,
    pub width: i32,
    pub height: i32,
    pub fps: u32,
    pub player_size: i32,
    pub player_speed: i32,
    pub player_bottom_margin: i32,
    pub obstacle_size: i32,
    pub obstacle_speed: i32,
    pub spawn_interval: Duration,
    pub font_size: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE,
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            fps: TARGET_FPS,
            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            obstacle_size: OBSTACLE_SIZE,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: Duration::from_millis(OBSTACLE_SPAWN_MS),
            font_size: FONT_SIZE,
        }
    }
}

impl GameConfig {
    /// Check that the player and obstacles fit inside the playfield
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::EmptyPlayfield {
                width: self.width,
                height: self.height,
            });
        }
        for (what, size) in [("player", self.player_size), ("obstacle", self.obstacle_size)] {
            if size <= 0 {
                return Err(ConfigError::NonPositiveSize { what, size });
            }
            if size > self.width {
                return Err(ConfigError::TooWide {
                    what,
                    size,
                    width: self.width,
                });
            }
        }
        if self.player_size + self.player_bottom_margin > self.height {
            return Err(ConfigError::TooTall {
                size: self.player_size,
                margin: self.player_bottom_margin,
                height: self.height,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        Ok(())
    }

    /// Rightmost x the player may occupy
    pub fn player_max_x(&self) -> i32 {
        (self.width - self.player_size).max(0)
    }

    /// Rightmost x an obstacle may spawn at
    pub fn obstacle_max_x(&self) -> i32 {
        (self.width - self.obstacle_size).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.player_max_x(), 550);
        assert_eq!(config.obstacle_max_x(), 550);
    }

    #[test]
    fn test_rejects_oversized_player() {
        let config = GameConfig {
            player_size: 700,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooWide {
                what: "player",
                size: 700,
                width: 600
            })
        );
    }

    #[test]
    fn test_rejects_zero_obstacle_and_zero_fps() {
        let config = GameConfig {
            obstacle_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveSize { what: "obstacle", .. })
        ));

        let config = GameConfig {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameRate));
    }

    #[test]
    fn test_rejects_player_taller_than_playfield() {
        let config = GameConfig {
            height: 60,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TooTall { .. })));
    }
}
