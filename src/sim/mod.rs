//! Gameplay simulation module
//!
//! All gameplay logic lives here:
//! - One explicit `GameState` record, no globals
//! - Seeded RNG only, so a seed replays the same street
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{enemy_collision_check, item_collision_check};
pub use state::{Enemy, GameEvent, GameState, GemColor, Item, Player, Scoreboard};
pub use tick::{Direction, handle_input, update_all};
