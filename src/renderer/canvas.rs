//! `CanvasRenderingContext2d` surface

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use super::surface::Surface;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::hud::TextDraw;
use crate::sim::{Rect, SpriteId};

/// Draws into a 2D canvas context using `<img>` sprite sheets from the page
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sheets: HashMap<SpriteId, HtmlImageElement>,
}

impl CanvasSurface {
    /// Size the canvas to the play field and look up the sprite sheets.
    /// Missing sheets are logged and skipped when drawing.
    pub fn new(canvas: &HtmlCanvasElement, document: &Document) -> Option<Self> {
        canvas.set_width(FIELD_WIDTH as u32);
        canvas.set_height(FIELD_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let mut sheets = HashMap::new();
        for id in [SpriteId::Player, SpriteId::Obstacle, SpriteId::Background] {
            match document
                .get_element_by_id(id.element_id())
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            {
                Some(img) => {
                    sheets.insert(id, img);
                }
                None => log::warn!("Sprite sheet #{} not found", id.element_id()),
            }
        }

        Some(Self { ctx, sheets })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, FIELD_WIDTH as f64, FIELD_HEIGHT as f64);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, src: Rect, dst: Rect) {
        let Some(img) = self.sheets.get(&sprite) else { return };
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                img,
                src.pos.x as f64,
                src.pos.y as f64,
                src.size.x as f64,
                src.size.y as f64,
                dst.pos.x as f64,
                dst.pos.y as f64,
                dst.size.x as f64,
                dst.size.y as f64,
            );
    }

    fn draw_text(&mut self, text: &TextDraw) {
        self.ctx.set_text_align(text.align.as_str());
        self.ctx.set_font(text.font);
        self.ctx.set_fill_style_str(text.color);
        let _ = self
            .ctx
            .fill_text(&text.text, text.pos.x as f64, text.pos.y as f64);
    }
}
