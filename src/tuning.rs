//! Game balance
//!
//! Defaults reproduce the classic street: three bugs at 100-400 units/s and a
//! gem every 0-15 seconds. A harness may override any field from JSON; missing
//! fields keep their defaults.

use serde::{Deserialize, Serialize};

/// Most bugs a street can hold
pub const MAX_ENEMIES: usize = 8;

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Number of bugs on the street (fixed for the session)
    pub enemy_count: usize,
    /// Slowest bug speed (units/s, inclusive)
    pub enemy_min_speed: u32,
    /// Fastest bug speed (units/s, exclusive)
    pub enemy_max_speed: u32,
    /// Upper bound of the gem spawn delay (seconds, exclusive)
    pub item_max_wait: u32,
    /// Points for reaching the water
    pub water_reward: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            enemy_count: 3,
            enemy_min_speed: 100,
            enemy_max_speed: 400,
            item_max_wait: 15,
            water_reward: 100,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON. The result is sanitized.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Parse tuning from JSON, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning: {:?}", tuning);
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Repair values that would leave a random draw with an empty range or
    /// an unusable enemy pool
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let enemy_count = self.enemy_count.clamp(1, MAX_ENEMIES);
        if enemy_count != self.enemy_count {
            log::warn!(
                "Enemy count {} outside 1..={}, using {}",
                self.enemy_count,
                MAX_ENEMIES,
                enemy_count
            );
            self.enemy_count = enemy_count;
        }

        if self.enemy_min_speed >= self.enemy_max_speed {
            log::warn!(
                "Enemy speed range {}..{} is empty, using {}..{}",
                self.enemy_min_speed,
                self.enemy_max_speed,
                defaults.enemy_min_speed,
                defaults.enemy_max_speed
            );
            self.enemy_min_speed = defaults.enemy_min_speed;
            self.enemy_max_speed = defaults.enemy_max_speed;
        }

        if self.item_max_wait == 0 {
            log::warn!("Item wait range is empty, using 0..{}", defaults.item_max_wait);
            self.item_max_wait = defaults.item_max_wait;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "enemy_count": 5 }"#).unwrap();
        assert_eq!(tuning.enemy_count, 5);
        assert_eq!(tuning.enemy_min_speed, 100);
        assert_eq!(tuning.enemy_max_speed, 400);
        assert_eq!(tuning.item_max_wait, 15);
        assert_eq!(tuning.water_reward, 100);
    }

    #[test]
    fn test_malformed_json() {
        assert!(Tuning::from_json("{ enemy_count: }").is_err());
        assert_eq!(Tuning::from_json_or_default("not json"), Tuning::default());
    }

    #[test]
    fn test_sanitize_empty_ranges() {
        let tuning = Tuning {
            enemy_min_speed: 300,
            enemy_max_speed: 300,
            item_max_wait: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(tuning.enemy_min_speed, 100);
        assert_eq!(tuning.enemy_max_speed, 400);
        assert_eq!(tuning.item_max_wait, 15);
    }

    #[test]
    fn test_sanitize_enemy_count() {
        let tuning = Tuning::from_json(r#"{ "enemy_count": 18446744073709551615 }"#).unwrap();
        assert_eq!(tuning.enemy_count, MAX_ENEMIES);

        let tuning = Tuning::from_json(r#"{ "enemy_count": 0 }"#).unwrap();
        assert_eq!(tuning.enemy_count, 1);

        // Constructing a state bypasses from_json but is still repaired
        let state = crate::sim::GameState::with_tuning(
            7,
            Tuning {
                enemy_count: usize::MAX,
                ..Default::default()
            },
        );
        assert_eq!(state.enemies.len(), MAX_ENEMIES);
    }

    #[test]
    fn test_roundtrip_through_json() {
        let tuning = Tuning {
            enemy_count: 4,
            water_reward: 250,
            ..Default::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }
}
