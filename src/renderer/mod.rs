//! Rendering
//!
//! The simulation never touches a canvas. Each entity describes itself as
//! sprite draws through `RenderBackend`, and `render_all` fixes the layering.

pub mod recording;
pub mod sprites;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use recording::{DrawCall, RecordingBackend};
pub use sprites::SpriteKey;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasBackend;

use crate::sim::grid::{BOARD_COLUMNS, BOARD_ROWS, COLUMN_WIDTH, ROW_HEIGHT};
use crate::sim::{Enemy, GameState, Item, Player, Scoreboard};

/// Where the score overlay is drawn
pub const SCORE_POS: (f32, f32) = (350.0, 100.0);

/// Font and fill for a text draw
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand
    pub font: &'static str,
    /// CSS color
    pub color: &'static str,
    /// CSS text-align
    pub align: &'static str,
}

/// The score overlay: 30px Impact, white, left-aligned
pub const SCORE_STYLE: TextStyle = TextStyle {
    font: "30px Impact",
    color: "white",
    align: "left",
};

/// Drawing primitives the harness provides
pub trait RenderBackend {
    /// Wipe the previous frame
    fn clear(&mut self) {}

    /// Draw a sprite with its top-left corner at (x, y)
    fn draw_image(&mut self, sprite: SpriteKey, x: f32, y: f32);

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
}

/// Something that can draw itself. Rendering never mutates state.
pub trait Render {
    fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B);
}

impl Render for Enemy {
    fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        backend.draw_image(SpriteKey::EnemyBug, self.pos.x, self.pos.y);
    }
}

impl Render for Player {
    fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        backend.draw_image(SpriteKey::CharBoy, self.pos.x, self.pos.y);
    }
}

impl Render for Item {
    /// Hidden gems produce no draw call
    fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        if self.visible {
            backend.draw_image(SpriteKey::gem(self.color), self.pos.x, self.pos.y);
        }
    }
}

impl Render for Scoreboard {
    fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        backend.fill_text(&self.text(), SCORE_POS.0, SCORE_POS.1, &SCORE_STYLE);
    }
}

/// Draw the street tiles
pub fn render_background<B: RenderBackend + ?Sized>(backend: &mut B) {
    for row in 0..BOARD_ROWS {
        let sprite = SpriteKey::tile_for_row(row);
        for col in 0..BOARD_COLUMNS {
            backend.draw_image(sprite, col as f32 * COLUMN_WIDTH, row as f32 * ROW_HEIGHT);
        }
    }
}

/// Draw one frame: background, enemies, player, gem, score overlay
pub fn render_all<B: RenderBackend + ?Sized>(state: &GameState, backend: &mut B) {
    backend.clear();
    render_background(backend);
    for enemy in &state.enemies {
        enemy.render(backend);
    }
    state.player.render(backend);
    state.item.render(backend);
    state.scoreboard.render(backend);
}
