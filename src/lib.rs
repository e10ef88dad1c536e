//! Bug Crossing - a street-crossing arcade game
//!
//! Core modules:
//! - `sim`: Gameplay state (grid, entities, collisions, per-frame update)
//! - `renderer`: Sprite keys, draw order and the backend the harness supplies
//! - `tuning`: Data-driven game balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Harness configuration constants
pub mod consts {
    /// Canvas size the background tiles and sprites are laid out for
    pub const CANVAS_WIDTH: u32 = 505;
    pub const CANVAS_HEIGHT: u32 = 606;

    /// Largest frame delta the harness forwards (seconds).
    /// A tab that was in the background would otherwise teleport every bug.
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Frame delta used by the headless demo (60 Hz)
    pub const DEMO_DT: f32 = 1.0 / 60.0;
}
