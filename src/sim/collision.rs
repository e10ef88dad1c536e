//! Collision detection and response
//!
//! Entities never look each other up. The handlers here receive the entities
//! they may touch as parameters, mutate them, and report what happened.

use rand::Rng;

use super::state::{Enemy, GameEvent, Item, Player, Scoreboard};
use crate::tuning::Tuning;

/// An enemy closer than this (horizontally, same lane) hits the player
pub const HIT_DISTANCE: f32 = 51.0;
/// Lower bound (exclusive) of `item.x - enemy.x` for an enemy to run over the gem.
/// A gem that appears right behind a bug's tail survives.
pub const GRAZE_MIN: f32 = 20.0;
/// Upper bound (exclusive) of `item.x - enemy.x` for an enemy to run over the gem
pub const GRAZE_MAX: f32 = 51.0;

/// Same lane and within hit distance. Distance 0 counts.
#[inline]
pub fn enemy_hits_player(enemy: &Enemy, player: &Player) -> bool {
    enemy.pos.y == player.pos.y && (enemy.pos.x - player.pos.x).abs() < HIT_DISTANCE
}

/// Visible gem in the enemy's lane, inside the open window (20, 51) ahead of it
#[inline]
pub fn enemy_grazes_item(enemy: &Enemy, item: &Item) -> bool {
    if !item.visible || enemy.pos.y != item.pos.y {
        return false;
    }
    let ahead = item.pos.x - enemy.pos.x;
    ahead > GRAZE_MIN && ahead < GRAZE_MAX
}

/// Player and gem share a cell. Both live on grid points so equality is exact.
#[inline]
pub fn player_reaches_item(item: &Item, player: &Player) -> bool {
    item.pos == player.pos
}

/// Check one enemy against the player and the gem.
///
/// A hit sends the player back to the start and clears the score. Both are
/// absolute, so several enemies hitting in the same frame is harmless.
pub fn enemy_collision_check<R: Rng + ?Sized>(
    index: usize,
    enemy: &Enemy,
    player: &mut Player,
    item: &mut Item,
    scoreboard: &mut Scoreboard,
    rng: &mut R,
    tuning: &Tuning,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if enemy_hits_player(enemy, player) {
        player.reset();
        scoreboard.clear();
        events.push(GameEvent::PlayerHit { enemy: index });
    }

    if enemy_grazes_item(enemy, item) {
        item.reset(rng, tuning);
        events.push(GameEvent::ItemGrazed { enemy: index });
    }

    events
}

/// Check the gem against the player; award its points and re-roll it on pickup
pub fn item_collision_check<R: Rng + ?Sized>(
    item: &mut Item,
    player: &Player,
    scoreboard: &mut Scoreboard,
    rng: &mut R,
    tuning: &Tuning,
) -> Option<GameEvent> {
    if !player_reaches_item(item, player) {
        return None;
    }

    let color = item.color;
    let points = item.points();
    scoreboard.add(points);
    item.reset(rng, tuning);

    Some(GameEvent::ItemCollected { color, points })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::grid::PLAYER_START;
    use crate::sim::state::GemColor;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn visible_item(x: f32, y: f32, color: GemColor) -> Item {
        Item {
            pos: Vec2::new(x, y),
            color,
            visible: true,
            wait: -1.0,
        }
    }

    #[test]
    fn test_hit_distance() {
        let player = Player { pos: Vec2::new(202.0, 50.0) };

        assert!(enemy_hits_player(&Enemy::at(Vec2::new(202.0, 50.0), 100.0), &player));
        assert!(enemy_hits_player(&Enemy::at(Vec2::new(151.5, 50.0), 100.0), &player));
        assert!(enemy_hits_player(&Enemy::at(Vec2::new(252.5, 50.0), 100.0), &player));
        assert!(!enemy_hits_player(&Enemy::at(Vec2::new(151.0, 50.0), 100.0), &player));
        assert!(!enemy_hits_player(&Enemy::at(Vec2::new(253.0, 50.0), 100.0), &player));
        // Different lane never hits
        assert!(!enemy_hits_player(&Enemy::at(Vec2::new(202.0, 133.0), 100.0), &player));
    }

    #[test]
    fn test_graze_window_is_open_interval() {
        let item = visible_item(202.0, 133.0, GemColor::Blue);
        let graze = |x: f32| enemy_grazes_item(&Enemy::at(Vec2::new(x, 133.0), 200.0), &item);

        assert!(!graze(182.0)); // ahead by exactly 20
        assert!(graze(181.0)); // ahead by 21
        assert!(graze(152.0)); // ahead by 50
        assert!(!graze(151.0)); // ahead by exactly 51
        // Gem sitting on the bug's tail
        assert!(!graze(202.0));
        assert!(!graze(230.0));
    }

    #[test]
    fn test_hidden_item_not_grazed() {
        let mut item = visible_item(202.0, 133.0, GemColor::Blue);
        item.visible = false;
        assert!(!enemy_grazes_item(&Enemy::at(Vec2::new(170.0, 133.0), 200.0), &item));
    }

    #[test]
    fn test_enemy_collision_resets_player_and_score() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let enemy = Enemy::at(Vec2::new(180.0, 50.0), 300.0);
        let mut player = Player { pos: Vec2::new(202.0, 50.0) };
        let mut item = visible_item(0.0, 216.0, GemColor::Green);
        let mut scoreboard = Scoreboard { score: 700 };

        let events = enemy_collision_check(
            2,
            &enemy,
            &mut player,
            &mut item,
            &mut scoreboard,
            &mut rng,
            &tuning,
        );
        assert_eq!(events, vec![GameEvent::PlayerHit { enemy: 2 }]);
        assert_eq!(player.pos, PLAYER_START);
        assert_eq!(scoreboard.score, 0);
        assert!(item.visible);

        // Checking again with the player already home changes nothing
        scoreboard.score = 300;
        let events = enemy_collision_check(
            2,
            &enemy,
            &mut player,
            &mut item,
            &mut scoreboard,
            &mut rng,
            &tuning,
        );
        assert!(events.is_empty());
        assert_eq!(player.pos, PLAYER_START);
        assert_eq!(scoreboard.score, 300);
    }

    #[test]
    fn test_enemy_grazes_item_resets_it() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let enemy = Enemy::at(Vec2::new(170.0, 133.0), 300.0);
        let mut player = Player::new();
        let mut item = visible_item(202.0, 133.0, GemColor::Orange);
        let mut scoreboard = Scoreboard { score: 400 };

        let events = enemy_collision_check(
            0,
            &enemy,
            &mut player,
            &mut item,
            &mut scoreboard,
            &mut rng,
            &tuning,
        );
        assert_eq!(events, vec![GameEvent::ItemGrazed { enemy: 0 }]);
        assert!(!item.visible);
        // Grazing costs the player nothing
        assert_eq!(scoreboard.score, 400);
    }

    #[test]
    fn test_item_collection_awards_color_points() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let player = Player { pos: Vec2::new(202.0, 133.0) };

        for (color, points) in [
            (GemColor::Blue, 100),
            (GemColor::Green, 200),
            (GemColor::Orange, 500),
        ] {
            let mut item = visible_item(202.0, 133.0, color);
            let mut scoreboard = Scoreboard { score: 50 };
            let event =
                item_collision_check(&mut item, &player, &mut scoreboard, &mut rng, &tuning);
            assert_eq!(event, Some(GameEvent::ItemCollected { color, points }));
            assert_eq!(scoreboard.score, 50 + points);
            assert!(!item.visible);
        }
    }

    #[test]
    fn test_item_needs_exact_cell() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(4);
        let player = Player { pos: Vec2::new(101.0, 133.0) };
        let mut item = visible_item(202.0, 133.0, GemColor::Blue);
        let mut scoreboard = Scoreboard::default();

        assert_eq!(
            item_collision_check(&mut item, &player, &mut scoreboard, &mut rng, &tuning),
            None
        );
        assert!(item.visible);
        assert_eq!(scoreboard.score, 0);
    }
}
