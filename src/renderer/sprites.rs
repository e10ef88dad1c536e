//! Sprite identifiers
//!
//! The simulation names sprites; the backend owns the images.

use crate::sim::GemColor;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    WaterBlock,
    StoneBlock,
    GrassBlock,
    EnemyBug,
    CharBoy,
    GemBlue,
    GemGreen,
    GemOrange,
}

impl SpriteKey {
    pub const ALL: [SpriteKey; 8] = [
        SpriteKey::WaterBlock,
        SpriteKey::StoneBlock,
        SpriteKey::GrassBlock,
        SpriteKey::EnemyBug,
        SpriteKey::CharBoy,
        SpriteKey::GemBlue,
        SpriteKey::GemGreen,
        SpriteKey::GemOrange,
    ];

    /// Asset path relative to the page
    pub fn path(self) -> &'static str {
        match self {
            SpriteKey::WaterBlock => "images/water-block.png",
            SpriteKey::StoneBlock => "images/stone-block.png",
            SpriteKey::GrassBlock => "images/grass-block.png",
            SpriteKey::EnemyBug => "images/enemy-bug.png",
            SpriteKey::CharBoy => "images/char-boy.png",
            SpriteKey::GemBlue => "images/Gem-Blue.png",
            SpriteKey::GemGreen => "images/Gem-Green.png",
            SpriteKey::GemOrange => "images/Gem-Orange.png",
        }
    }

    pub fn gem(color: GemColor) -> Self {
        match color {
            GemColor::Blue => SpriteKey::GemBlue,
            GemColor::Green => SpriteKey::GemGreen,
            GemColor::Orange => SpriteKey::GemOrange,
        }
    }

    /// Background tile for a board row: water on top, three stone, then grass
    pub fn tile_for_row(row: u32) -> Self {
        match row {
            0 => SpriteKey::WaterBlock,
            1..=3 => SpriteKey::StoneBlock,
            _ => SpriteKey::GrassBlock,
        }
    }
}
