//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::events::EventQueue;
use crate::tuning::Tuning;
use crate::{field_center, heading_to_direction};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Welcome screen, input disabled except the start trigger
    Starting,
    /// Active gameplay
    Playing,
    /// Timed pause after losing a ship
    Dying,
    /// Lives exhausted; auto-returns to the welcome screen
    GameOver,
}

/// Rock size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Large,
    Medium,
    Small,
}

impl Tier {
    /// Tier a destroyed rock's children drop to, if it splits at all
    pub fn split(self) -> Option<Tier> {
        match self {
            Tier::Large => Some(Tier::Medium),
            Tier::Medium => Some(Tier::Small),
            Tier::Small => None,
        }
    }
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in degrees, 0 = up, kept in [0, 360)
    pub angle: f32,
    pub speed: f32,
    pub throttle_on: bool,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            angle: 0.0,
            speed: 0.0,
            throttle_on: false,
        }
    }

    /// Unit direction for the current heading
    pub fn direction(&self) -> Vec2 {
        heading_to_direction(self.angle)
    }
}

/// A projectile in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// Heading in degrees, fixed at fire time
    pub angle: f32,
    pub speed: f32,
    /// Cumulative distance traveled since fired
    pub traveled: f32,
}

/// A drifting rock
#[derive(Debug, Clone)]
pub struct Rock {
    pub id: u32,
    pub pos: Vec2,
    pub tier: Tier,
    pub speed: f32,
    /// Fixed at spawn; components in (-1, 1), so not quite unit length
    pub direction: Vec2,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// The only source of randomness in the simulation
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks spent in Playing since the last difficulty ramp
    pub ramp_ticks: u64,
    /// Current minimum rock spawn distance from the ship; shrinks over time
    pub min_spawn_distance: f32,
    /// Tick of the most recent shot, for the fire cooldown
    pub last_fire_tick: Option<u64>,
    /// Some exactly while a round is live (Playing/Dying and between rounds)
    pub ship: Option<Ship>,
    pub projectiles: Vec<Projectile>,
    pub rocks: Vec<Rock>,
    /// Deferred phase transitions
    pub events: EventQueue,
    /// Balance values
    pub tuning: Tuning,
    next_id: u32,
}

impl GameState {
    /// Create a state on the welcome screen with the classic balance table
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Starting,
            score: 0,
            lives: 0,
            time_ticks: 0,
            ramp_ticks: 0,
            min_spawn_distance: tuning.min_spawn_distance,
            last_fire_tick: None,
            ship: None,
            projectiles: Vec::new(),
            rocks: Vec::new(),
            events: EventQueue::new(),
            tuning,
            next_id: 1,
        }
    }

    /// Allocate a new entity id
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Put a fresh ship at the field center
    pub fn respawn_ship(&mut self) {
        self.ship = Some(Ship::new(field_center()));
    }
}
