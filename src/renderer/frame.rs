//! Frame composition: background, player, obstacles, HUD

use super::surface::Surface;
use crate::hud;
use crate::sim::{Entity, GameState};

fn blit(surface: &mut impl Surface, entity: &impl Entity) {
    surface.draw_sprite(entity.sprite(), entity.source(), entity.bounds());
}

/// Draw the whole field back to front
pub fn draw_frame(state: &GameState, surface: &mut impl Surface) {
    surface.clear();

    let background = &state.background;
    for tile in background.tiles() {
        surface.draw_sprite(background.sprite(), background.source(), tile);
    }

    blit(surface, &state.player);

    for obstacle in &state.obstacles {
        blit(surface, obstacle);
    }

    for text in &hud::score_text(state.score) {
        surface.draw_text(text);
    }

    if state.is_game_over() {
        for text in &hud::game_over_text() {
            surface.draw_text(text);
        }
    }
}
