//! Game state and core simulation types
//!
//! Everything a restart throws away lives in `GameState`. A restart builds a
//! brand new value rather than patching the old one.

use super::rect::Rect;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Obstacles fall, the player moves, score climbs
    #[default]
    Running,
    /// Frozen after a collision, waiting for a restart
    GameOver,
}

/// The player's square. Only `x` changes during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    /// Horizontally centered, just above the bottom margin
    pub fn spawn(config: &GameConfig) -> Self {
        let x = (config.width - config.player_size) / 2;
        let y = config.height - config.player_size - config.player_bottom_margin;
        Self {
            rect: Rect::square(x, y, config.player_size),
        }
    }

    pub fn x(&self) -> i32 {
        self.rect.pos.x
    }

    /// Shift horizontally, then clamp into `[0, max_x]`
    pub fn shift(&mut self, dx: i32, max_x: i32) {
        self.rect.pos.x = (self.rect.pos.x + dx).clamp(0, max_x.max(0));
    }
}

/// A falling square. `x` is fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Obstacle {
    pub rect: Rect,
}

impl Obstacle {
    /// New obstacle at column `x`, just above the visible top edge
    pub fn spawn(x: i32, config: &GameConfig) -> Self {
        Self {
            rect: Rect::square(x, -config.obstacle_size, config.obstacle_size),
        }
    }

    pub fn y(&self) -> i32 {
        self.rect.pos.y
    }

    pub fn fall(&mut self, dy: i32) {
        self.rect.pos.y += dy;
    }
}

/// Complete game state for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Settings this run was built with
    pub config: GameConfig,
    pub player: Player,
    /// Active obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    /// One point per running tick
    pub score: u64,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh run: centered player, no obstacles, zero score, running
    pub fn new(config: GameConfig) -> Self {
        Self {
            player: Player::spawn(&config),
            obstacles: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            config,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// First obstacle (in spawn order) overlapping the player
    pub fn first_collision(&self) -> Option<usize> {
        self.obstacles
            .iter()
            .position(|o| self.player.rect.intersects(&o.rect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_fresh() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.rect, Rect::square(275, 730, 50));
    }

    #[test]
    fn test_player_shift_clamps_to_playfield() {
        let config = GameConfig::default();
        let mut player = Player::spawn(&config);

        player.shift(-1000, config.player_max_x());
        assert_eq!(player.x(), 0);

        player.shift(1000, config.player_max_x());
        assert_eq!(player.x(), 550);

        player.shift(-7, config.player_max_x());
        assert_eq!(player.x(), 543);
    }

    #[test]
    fn test_obstacle_spawns_above_top_edge() {
        let config = GameConfig::default();
        let obstacle = Obstacle::spawn(120, &config);
        assert_eq!(obstacle.rect, Rect::square(120, -50, 50));
        assert_eq!(obstacle.rect.bottom(), 0);
    }

    #[test]
    fn test_first_collision_uses_spawn_order() {
        let mut state = GameState::new(GameConfig::default());
        state.obstacles.push(Obstacle {
            rect: Rect::square(0, 0, 50),
        });
        state.obstacles.push(Obstacle {
            rect: Rect::square(280, 720, 50),
        });
        state.obstacles.push(Obstacle {
            rect: Rect::square(270, 740, 50),
        });
        assert_eq!(state.first_collision(), Some(1));
    }
}
