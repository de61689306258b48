//! Score and game-over text layouts
//!
//! Pure functions of game values; each message is a dark shadow pass
//! followed by a light pass offset by two pixels.

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

pub const SHADOW_COLOR: &str = "#222";
pub const TEXT_COLOR: &str = "#fff";
pub const SCORE_FONT: &str = "bold 35px Helvetica";
pub const GAME_OVER_FONT: &str = "bold 40px Helvetica";
pub const GAME_OVER_MESSAGE: &str = "Game Over press Enter or Swipe Down to restart";

/// Offset of the light pass from the shadow pass
const SHADOW_OFFSET: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

impl TextAlign {
    /// Canvas `textAlign` value
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
        }
    }
}

/// One text draw call
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    pub text: String,
    pub pos: Vec2,
    pub font: &'static str,
    pub color: &'static str,
    pub align: TextAlign,
}

fn shadowed(text: String, at: Vec2, font: &'static str, align: TextAlign) -> [TextDraw; 2] {
    [
        TextDraw {
            text: text.clone(),
            pos: at,
            font,
            color: SHADOW_COLOR,
            align,
        },
        TextDraw {
            text,
            pos: at + Vec2::splat(SHADOW_OFFSET),
            font,
            color: TEXT_COLOR,
            align,
        },
    ]
}

/// "Score: N" in the top-left corner
pub fn score_text(score: u64) -> [TextDraw; 2] {
    shadowed(
        format!("Score: {}", score),
        Vec2::new(10.0, 50.0),
        SCORE_FONT,
        TextAlign::Left,
    )
}

/// Restart prompt centered a quarter of the way down the field
pub fn game_over_text() -> [TextDraw; 2] {
    shadowed(
        GAME_OVER_MESSAGE.to_string(),
        Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 4.0),
        GAME_OVER_FONT,
        TextAlign::Center,
    )
}
