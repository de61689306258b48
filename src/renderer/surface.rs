//! Drawing surface abstraction

use crate::hud::TextDraw;
use crate::sim::{Rect, SpriteId};

/// A 2D target sized to the logical play field
pub trait Surface {
    fn clear(&mut self);
    /// Copy the `src` cell of a sprite sheet into `dst`
    fn draw_sprite(&mut self, sprite: SpriteId, src: Rect, dst: Rect);
    fn draw_text(&mut self, text: &TextDraw);
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Sprite { sprite: SpriteId, src: Rect, dst: Rect },
    Text(TextDraw),
}

/// Surface that records calls instead of drawing (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sprite blits of one sheet, in draw order
    pub fn sprites(&self, id: SpriteId) -> impl Iterator<Item = (Rect, Rect)> + '_ {
        self.commands.iter().filter_map(move |cmd| match cmd {
            DrawCommand::Sprite { sprite, src, dst } if *sprite == id => Some((*src, *dst)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextDraw> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, src: Rect, dst: Rect) {
        self.commands.push(DrawCommand::Sprite { sprite, src, dst });
    }

    fn draw_text(&mut self, text: &TextDraw) {
        self.commands.push(DrawCommand::Text(text.clone()));
    }
}
