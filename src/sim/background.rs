//! Scrolling parallax background
//!
//! Scrolls on its own fixed-rate timer, independent of the tick rate, and is
//! drawn as two tiles so the wrap never shows a seam.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, Rect, SpriteId};
use crate::consts::*;
use crate::frame_interval_ms;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Background {
    /// Scroll offset (0 or negative)
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Distance per scroll step
    pub speed: f32,
    /// Milliseconds accumulated since the last scroll step
    pub timer: f32,
    /// Milliseconds per scroll step
    pub interval: f32,
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

impl Background {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: BACKGROUND_WIDTH,
            height: BACKGROUND_HEIGHT,
            speed: BACKGROUND_SPEED,
            timer: 0.0,
            interval: frame_interval_ms(BACKGROUND_FPS),
        }
    }

    /// Wrap first, then maybe scroll one step
    pub fn update(&mut self, elapsed_ms: f32) {
        if self.x < -self.width {
            self.x = 0.0;
        }

        self.timer += elapsed_ms;
        if self.timer > self.interval {
            self.x -= self.speed;
            self.timer = 0.0;
        }
    }

    pub fn restart(&mut self) {
        self.x = 0.0;
    }

    /// Both tile placements, leading tile first
    pub fn tiles(&self) -> [Rect; 2] {
        [
            Rect::new(self.x, self.y, self.width, self.height),
            Rect::new(
                self.width + self.x - self.speed,
                self.y,
                self.width,
                self.height,
            ),
        ]
    }
}

impl Entity for Background {
    fn sprite(&self) -> SpriteId {
        SpriteId::Background
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn source(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolls_after_interval() {
        let mut bg = Background::new();
        bg.update(5.0);
        assert_eq!(bg.x, 0.0, "timer must exceed 5ms");
        bg.update(0.5);
        assert_eq!(bg.x, -3.0);
        assert_eq!(bg.timer, 0.0);
    }

    #[test]
    fn test_one_step_per_update() {
        // A long frame still scrolls a single step
        let mut bg = Background::new();
        bg.update(100.0);
        assert_eq!(bg.x, -BACKGROUND_SPEED);
    }

    #[test]
    fn test_wrap_then_scroll() {
        let mut bg = Background::new();
        bg.x = -BACKGROUND_WIDTH - 1.0;
        bg.update(1.0);
        assert_eq!(bg.x, 0.0);

        bg.x = -BACKGROUND_WIDTH - 1.0;
        bg.timer = 0.0;
        bg.update(10.0);
        assert_eq!(bg.x, -BACKGROUND_SPEED);
    }

    #[test]
    fn test_no_wrap_at_exactly_minus_width() {
        let mut bg = Background::new();
        bg.x = -BACKGROUND_WIDTH;
        bg.update(1.0);
        assert_eq!(bg.x, -BACKGROUND_WIDTH);
    }

    #[test]
    fn test_tiles_overlap_by_speed() {
        let mut bg = Background::new();
        bg.x = -300.0;
        let [lead, trail] = bg.tiles();
        assert_eq!(lead.pos.x, -300.0);
        assert_eq!(trail.pos.x, 2400.0 - 300.0 - 3.0);
    }

    #[test]
    fn test_restart() {
        let mut bg = Background::new();
        bg.x = -1234.0;
        bg.restart();
        assert_eq!(bg.x, 0.0);
    }
}
