//! Frame description
//!
//! The game describes each frame as a clear color plus an ordered list of
//! draw commands. Backends turn that into pixels; tests inspect it directly.

use glam::IVec2;

use super::vertex::{Color, colors};
use crate::consts::SCORE_TEXT_POS;
use crate::sim::{GameState, Rect};

pub const GAME_OVER_TEXT: &str = "Game Over! Press R to Restart";

/// Where a piece of text is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Top-left corner at this point
    TopLeft(IVec2),
    /// Centered on this point
    Center(IVec2),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        anchor: TextAnchor,
        size: u32,
        color: Color,
    },
}

/// One complete frame, drawn back to front
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub clear: Color,
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(clear: Color) -> Self {
        Self {
            clear,
            commands: Vec::new(),
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    pub fn text(&mut self, text: impl Into<String>, anchor: TextAnchor, size: u32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            anchor,
            size,
            color,
        });
    }
}

/// Build the frame for the current state
pub fn compose(state: &GameState) -> Frame {
    let config = &state.config;
    let mut frame = Frame::new(colors::BACKGROUND);

    frame.fill_rect(state.player.rect, colors::PLAYER);
    for obstacle in &state.obstacles {
        frame.fill_rect(obstacle.rect, colors::OBSTACLE);
    }

    let (score_x, score_y) = SCORE_TEXT_POS;
    frame.text(
        format!("Score: {}", state.score),
        TextAnchor::TopLeft(IVec2::new(score_x, score_y)),
        config.font_size,
        colors::TEXT,
    );

    if state.is_game_over() {
        frame.text(
            GAME_OVER_TEXT,
            TextAnchor::Center(IVec2::new(config.width / 2, config.height / 2)),
            config.font_size,
            colors::TEXT,
        );
    }

    frame
}
