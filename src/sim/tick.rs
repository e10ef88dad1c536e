//! Per-frame simulation entry points
//!
//! The harness calls `handle_input` for each key released and `update_all`
//! once per animation frame, before rendering.

use super::collision::{enemy_collision_check, item_collision_check};
use super::state::{GameEvent, GameState};

/// A single grid move requested by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Legacy `keyCode` values of the arrow keys
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Direction::Left),
            38 => Some(Direction::Up),
            39 => Some(Direction::Right),
            40 => Some(Direction::Down),
            _ => None,
        }
    }

    /// `KeyboardEvent.key` names of the arrow keys
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowUp" | "Up" => Some(Direction::Up),
            "ArrowRight" | "Right" => Some(Direction::Right),
            "ArrowDown" | "Down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Advance every entity by `dt` seconds.
///
/// Enemies move, recycle if they left the board, then check collisions at
/// their new position. The gem counts down and checks the player last.
pub fn update_all(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let GameState {
        tuning,
        player,
        enemies,
        item,
        scoreboard,
        frame,
        rng,
        ..
    } = state;

    *frame += 1;
    let mut events = Vec::new();

    for (index, enemy) in enemies.iter_mut().enumerate() {
        enemy.advance(dt);
        if enemy.reset_check(rng, tuning) {
            events.push(GameEvent::EnemyRecycled {
                enemy: index,
                lane_y: enemy.pos.y,
                speed: enemy.speed,
            });
        }
        events.extend(enemy_collision_check(
            index, enemy, player, item, scoreboard, rng, tuning,
        ));
    }

    if item.update(dt) {
        events.push(GameEvent::ItemAppeared {
            color: item.color,
            pos: item.pos,
        });
    }
    if item.visible {
        events.extend(item_collision_check(item, player, scoreboard, rng, tuning));
    }

    for event in &events {
        log::debug!("frame {}: {:?}", frame, event);
    }

    events
}

/// Apply one player move. `None` (a key we don't map) is ignored.
///
/// Stepping into the water sends the player home and pays the water reward.
pub fn handle_input(state: &mut GameState, direction: Option<Direction>) -> Option<GameEvent> {
    let direction = direction?;
    if !state.player.step(direction) {
        return None;
    }

    if state.player.in_water() {
        state.player.reset();
        let points = state.tuning.water_reward;
        state.scoreboard.add(points);
        log::debug!("Water reached, score {}", state.scoreboard.score);
        return Some(GameEvent::WaterReached { points });
    }

    None
}
