//! Shared shape of animated, positioned, drawable objects

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which sprite sheet an entity is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Player,
    Obstacle,
    Background,
}

impl SpriteId {
    /// DOM id of the `<img>` holding the sheet
    pub fn element_id(&self) -> &'static str {
        match self {
            SpriteId::Player => "player",
            SpriteId::Obstacle => "enemy",
            SpriteId::Background => "background",
        }
    }
}

/// Axis-aligned rectangle in field coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Frame-index animation advanced by elapsed time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animation {
    pub frame: u32,
    pub max_frame: u32,
    /// Milliseconds accumulated since the last frame step
    pub timer: f32,
    /// Milliseconds per frame step
    pub interval: f32,
}

impl Animation {
    pub fn new(max_frame: u32, interval: f32) -> Self {
        Self {
            frame: 0,
            max_frame,
            timer: 0.0,
            interval,
        }
    }

    /// Step the frame once the timer passes the interval, wrapping past `max_frame`
    pub fn advance(&mut self, elapsed_ms: f32) {
        self.timer += elapsed_ms;
        if self.timer > self.interval {
            self.frame += 1;
            self.timer = 0.0;
        }
        if self.frame > self.max_frame {
            self.frame = 0;
        }
    }

    pub fn rewind(&mut self) {
        self.frame = 0;
        self.timer = 0.0;
    }
}

/// Anything the renderer can blit from a sprite sheet
pub trait Entity {
    fn sprite(&self) -> SpriteId;
    /// Where the entity sits in the field
    fn bounds(&self) -> Rect;
    /// Which cell of the sprite sheet to draw
    fn source(&self) -> Rect;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_steps_after_interval() {
        let mut anim = Animation::new(5, 50.0);
        anim.advance(50.0);
        assert_eq!(anim.frame, 0, "timer must exceed the interval");
        anim.advance(1.0);
        assert_eq!(anim.frame, 1);
        assert_eq!(anim.timer, 0.0);
    }

    #[test]
    fn test_animation_wraps_past_max() {
        let mut anim = Animation::new(2, 10.0);
        for _ in 0..2 {
            anim.advance(11.0);
        }
        assert_eq!(anim.frame, 2);
        anim.advance(11.0);
        assert_eq!(anim.frame, 0);
    }

    #[test]
    fn test_shrinking_max_frame_wraps() {
        let mut anim = Animation::new(8, 50.0);
        anim.frame = 7;
        anim.max_frame = 6;
        anim.advance(1.0);
        assert_eq!(anim.frame, 0);
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.center(), Vec2::new(60.0, 45.0));
    }
}
