//! Data-driven game balance
//!
//! Every gameplay number lives here so the classic balance table can be
//! swapped out from JSON without touching simulation code. Missing fields
//! fall back to the classic values.

use serde::{Deserialize, Serialize};

use crate::sim::Tier;

/// One value per rock tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TierTable<T> {
    pub large: T,
    pub medium: T,
    pub small: T,
}

impl<T: Copy> TierTable<T> {
    pub fn get(&self, tier: Tier) -> T {
        match tier {
            Tier::Large => self.large,
            Tier::Medium => self.medium,
            Tier::Small => self.small,
        }
    }
}

/// Game balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    /// Sprite footprint; the muzzle offset is derived from it
    pub ship_size: f32,
    /// Degrees of rotation per tick while a turn key is held
    pub turn_rate_deg: f32,
    /// Speed bled off per tick while turning
    pub turn_drag: f32,
    /// Speed gained per tick while the throttle is on
    pub thrust_accel: f32,
    pub max_ship_speed: f32,

    // === Projectiles ===
    pub projectile_speed: f32,
    /// Cumulative travel after which a projectile expires
    pub projectile_max_range: f32,
    /// Minimum ticks between shots
    pub fire_cooldown_ticks: u32,

    // === Rocks ===
    pub rock_speed: f32,
    /// Horizontal offset of the two children of a split rock
    pub split_offset: f32,
    /// Soft cap on fresh spawns (splits are exempt)
    pub rock_cap: usize,
    /// Higher ceiling used by the difficulty ramp
    pub ramp_rock_cap: usize,
    pub initial_rocks: usize,
    /// Border kept clear on the first placement roll
    pub spawn_margin: f32,

    // === Spawn-distance ramp ===
    pub min_spawn_distance: f32,
    pub min_spawn_distance_floor: f32,
    pub min_spawn_distance_step: f32,
    pub ramp_interval_ticks: u64,

    // === Round ===
    pub starting_lives: u8,
    /// Pause between losing a ship and respawning
    pub death_pause_ticks: u64,
    /// Pause on the game-over screen before returning to the title
    pub game_over_delay_ticks: u64,

    // === Per-tier tables ===
    /// Projectile-rock hit radius
    pub hit_radius: TierTable<f32>,
    /// Ship-rock death radius
    pub death_radius: TierTable<f32>,
    pub score_value: TierTable<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_size: 50.0,
            turn_rate_deg: 10.0,
            turn_drag: 0.1,
            thrust_accel: 1.0,
            max_ship_speed: 20.0,

            projectile_speed: 15.0,
            projectile_max_range: 700.0,
            fire_cooldown_ticks: 5,

            rock_speed: 4.0,
            split_offset: 10.0,
            rock_cap: 10,
            ramp_rock_cap: 15,
            initial_rocks: 4,
            spawn_margin: 200.0,

            min_spawn_distance: 350.0,
            min_spawn_distance_floor: 200.0,
            min_spawn_distance_step: 50.0,
            ramp_interval_ticks: 600,

            starting_lives: 3,
            death_pause_ticks: 60,
            game_over_delay_ticks: 90,

            hit_radius: TierTable {
                large: 80.0,
                medium: 55.0,
                small: 30.0,
            },
            death_radius: TierTable {
                large: 90.0,
                medium: 65.0,
                small: 40.0,
            },
            score_value: TierTable {
                large: 20,
                medium: 50,
                small: 100,
            },
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) balance table from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_table() {
        let t = Tuning::default();
        assert_eq!(t.hit_radius.get(Tier::Large), 80.0);
        assert_eq!(t.hit_radius.get(Tier::Medium), 55.0);
        assert_eq!(t.hit_radius.get(Tier::Small), 30.0);
        assert_eq!(t.death_radius.get(Tier::Large), 90.0);
        assert_eq!(t.score_value.get(Tier::Small), 100);
        assert_eq!(t.starting_lives, 3);
        assert_eq!(t.initial_rocks, 4);
    }

    #[test]
    fn partial_json_falls_back_to_classic() {
        let t = Tuning::from_json(r#"{"rock_speed": 6.0}"#).unwrap();
        assert_eq!(t.rock_speed, 6.0);
        assert_eq!(t.projectile_speed, 15.0);
        assert_eq!(t.score_value.get(Tier::Medium), 50);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Tuning::from_json("{not json").is_err());
    }
}
