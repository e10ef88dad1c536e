//! Game state and entity types
//!
//! Everything a frame reads or writes lives in `GameState`. Entities reach
//! their siblings only through parameters handed to them by `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{
    COLUMN_WIDTH, PLAYER_MAX_X, PLAYER_MAX_Y, PLAYER_START, ROW_HEIGHT, is_water,
    random_item_column, random_street_row,
};
use super::tick::Direction;
use crate::tuning::Tuning;

/// Enemies enter the street just left of the first column
pub const ENEMY_SPAWN_X: f32 = -25.0;
/// Enemies past this x have left the board and are recycled
pub const ENEMY_DESPAWN_X: f32 = 500.0;

/// Gem roll above this is orange (10%)
pub const ORANGE_THRESHOLD: f32 = 9.0;
/// Gem roll above this (and not orange) is green (30%)
pub const GREEN_THRESHOLD: f32 = 6.0;
/// Gem rolls are drawn from [0, GEM_ROLL_RANGE)
pub const GEM_ROLL_RANGE: f32 = 10.0;

/// Something that happened during a frame, reported back to the harness.
/// State has already been updated when an event is returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// An enemy left the board and re-entered in a new lane
    EnemyRecycled { enemy: usize, lane_y: f32, speed: f32 },
    /// An enemy ran into the player; player back at start, score cleared
    PlayerHit { enemy: usize },
    /// An enemy ran over the visible gem
    ItemGrazed { enemy: usize },
    /// The gem's wait ran out
    ItemAppeared { color: GemColor, pos: Vec2 },
    /// The player picked up the gem
    ItemCollected { color: GemColor, points: u64 },
    /// The player reached the water
    WaterReached { points: u64 },
}

/// Gem colors, rarer gems are worth more
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GemColor {
    #[default]
    Blue,
    Green,
    Orange,
}

impl GemColor {
    /// Points awarded for collecting a gem of this color
    pub fn points(self) -> u64 {
        match self {
            GemColor::Blue => 100,
            GemColor::Green => 200,
            GemColor::Orange => 500,
        }
    }

    /// Map a roll in [0, 10) to a color: blue 60%, green 30%, orange 10%
    pub fn from_roll(roll: f32) -> Self {
        if roll > ORANGE_THRESHOLD {
            GemColor::Orange
        } else if roll > GREEN_THRESHOLD {
            GemColor::Green
        } else {
            GemColor::Blue
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_roll(rng.random::<f32>() * GEM_ROLL_RANGE)
    }
}

/// A bug crawling left to right along one lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Units per second
    pub speed: f32,
}

impl Enemy {
    /// Spawn at the left edge in a random lane with a random speed
    pub fn new<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(ENEMY_SPAWN_X, random_street_row(rng)),
            speed: random_speed(rng, tuning),
        }
    }

    /// Place an enemy explicitly (tests, scripted scenes)
    pub fn at(pos: Vec2, speed: f32) -> Self {
        Self { pos, speed }
    }

    /// Move along the lane
    pub fn advance(&mut self, dt: f32) {
        self.pos.x += self.speed * dt;
    }

    /// Recycle the enemy once it has left the board.
    /// Returns true if it was recycled.
    pub fn reset_check<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) -> bool {
        if self.pos.x <= ENEMY_DESPAWN_X {
            return false;
        }
        self.pos = Vec2::new(ENEMY_SPAWN_X, random_street_row(rng));
        self.speed = random_speed(rng, tuning);
        true
    }
}

/// Whole-number speed in [min, max)
fn random_speed<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> f32 {
    rng.random_range(tuning.enemy_min_speed..tuning.enemy_max_speed) as f32
}

/// The player's character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
}

impl Default for Player {
    fn default() -> Self {
        Self { pos: PLAYER_START }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the start cell
    pub fn reset(&mut self) {
        self.pos = PLAYER_START;
    }

    /// Move one cell if the destination is on the board.
    /// Upward moves may step into the water row; `in_water` reports that.
    /// Returns true if the player moved.
    pub fn step(&mut self, direction: Direction) -> bool {
        match direction {
            Direction::Left if self.pos.x > 0.0 => self.pos.x -= COLUMN_WIDTH,
            Direction::Right if self.pos.x < PLAYER_MAX_X => self.pos.x += COLUMN_WIDTH,
            Direction::Up if self.pos.y > 0.0 => self.pos.y -= ROW_HEIGHT,
            Direction::Down if self.pos.y < PLAYER_MAX_Y => self.pos.y += ROW_HEIGHT,
            _ => return false,
        }
        true
    }

    pub fn in_water(&self) -> bool {
        is_water(self.pos.y)
    }
}

/// The collectible gem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub pos: Vec2,
    pub color: GemColor,
    pub visible: bool,
    /// Seconds left before the gem appears
    pub wait: f32,
}

impl Item {
    /// First gem of a session: always blue, hidden, random cell and wait
    pub fn new<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(random_item_column(rng), random_street_row(rng)),
            color: GemColor::Blue,
            visible: false,
            wait: random_wait(rng, tuning),
        }
    }

    /// Count down the wait. Once visible the gem stays visible until reset.
    /// Returns true on the frame the gem appears.
    pub fn update(&mut self, dt: f32) -> bool {
        self.wait -= dt;
        if self.wait < 0.0 && !self.visible {
            self.visible = true;
            return true;
        }
        false
    }

    /// Hide the gem and re-roll its cell, color and wait
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) {
        self.pos = Vec2::new(random_item_column(rng), random_street_row(rng));
        self.visible = false;
        self.color = GemColor::random(rng);
        self.wait = random_wait(rng, tuning);
    }

    pub fn points(&self) -> u64 {
        self.color.points()
    }
}

/// Whole seconds in [0, max)
fn random_wait<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> f32 {
    rng.random_range(0..tuning.item_max_wait) as f32
}

/// Running score for the session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
}

impl Scoreboard {
    pub fn add(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    pub fn clear(&mut self) {
        self.score = 0;
    }

    /// Overlay text
    pub fn text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Balance in effect for this session
    pub tuning: Tuning,
    pub player: Player,
    /// Fixed-size pool, recycled in place
    pub enemies: Vec<Enemy>,
    pub item: Item,
    pub scoreboard: Scoreboard,
    /// Frames simulated so far
    pub frame: u64,
    #[serde(skip)]
    pub rng: Pcg32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut rng = Pcg32::seed_from_u64(seed);

        let enemies = (0..tuning.enemy_count)
            .map(|_| Enemy::new(&mut rng, &tuning))
            .collect();
        let item = Item::new(&mut rng, &tuning);

        Self {
            seed,
            tuning,
            player: Player::new(),
            enemies,
            item,
            scoreboard: Scoreboard::default(),
            frame: 0,
            rng,
        }
    }
}
