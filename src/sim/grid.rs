//! Street grid shared by every entity
//!
//! The board is a grid of 101 x 83 tiles. Positions are sprite origins, so the
//! street rows sit 50 units below the top edge of their tiles. Every position
//! the simulation produces lies on this grid, except for enemy x which slides
//! continuously along its lane.

use glam::Vec2;
use rand::Rng;

/// Width of one column
pub const COLUMN_WIDTH: f32 = 101.0;
/// Height of one row
pub const ROW_HEIGHT: f32 = 83.0;
/// Vertical offset of the first street row
pub const ROW_OFFSET: f32 = 50.0;

/// Columns on the board (the player may walk all of them)
pub const BOARD_COLUMNS: u32 = 5;
/// Rows of background tiles (water, three stone, two grass)
pub const BOARD_ROWS: u32 = 6;
/// Columns an item can spawn in
pub const ITEM_COLUMNS: u32 = 4;
/// Street lanes enemies and items travel in
pub const STREET_ROWS: u32 = 3;

/// Player spawn point: middle column, first grass row
pub const PLAYER_START: Vec2 = Vec2::new(2.0 * COLUMN_WIDTH, ROW_OFFSET + 3.0 * ROW_HEIGHT);

/// Rightmost x the player may stand on
pub const PLAYER_MAX_X: f32 = (BOARD_COLUMNS - 1) as f32 * COLUMN_WIDTH;
/// Bottom row the player may stand on
pub const PLAYER_MAX_Y: f32 = ROW_OFFSET + 4.0 * ROW_HEIGHT;

/// x of a column (0-based)
#[inline]
pub fn column_x(index: u32) -> f32 {
    index as f32 * COLUMN_WIDTH
}

/// y of a street lane (0-based, top lane first)
#[inline]
pub fn street_row_y(index: u32) -> f32 {
    ROW_OFFSET + index as f32 * ROW_HEIGHT
}

/// Any of the item columns, uniformly
pub fn random_item_column<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    column_x(rng.random_range(0..ITEM_COLUMNS))
}

/// Any of the street lanes, uniformly
pub fn random_street_row<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    street_row_y(rng.random_range(0..STREET_ROWS))
}

/// Whether `y` is one of the street lanes
pub fn is_street_row(y: f32) -> bool {
    (0..STREET_ROWS).any(|i| street_row_y(i) == y)
}

/// y reached the water row above the street
#[inline]
pub fn is_water(y: f32) -> bool {
    y < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_grid_coordinates() {
        assert_eq!(column_x(0), 0.0);
        assert_eq!(column_x(3), 303.0);
        assert_eq!(street_row_y(0), 50.0);
        assert_eq!(street_row_y(1), 133.0);
        assert_eq!(street_row_y(2), 216.0);
        assert_eq!(PLAYER_START, Vec2::new(202.0, 299.0));
        assert_eq!(PLAYER_MAX_X, 404.0);
        assert_eq!(PLAYER_MAX_Y, 382.0);
    }

    #[test]
    fn test_random_cells_stay_on_grid() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let x = random_item_column(&mut rng);
            assert!([0.0, 101.0, 202.0, 303.0].contains(&x));
            assert!(is_street_row(random_street_row(&mut rng)));
        }
    }

    #[test]
    fn test_water() {
        assert!(is_water(ROW_OFFSET - ROW_HEIGHT));
        assert!(!is_water(0.0));
        assert!(!is_street_row(PLAYER_START.y));
    }
}
