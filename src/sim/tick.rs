//! Fixed-rate simulation tick
//!
//! Core update loop that advances the simulation deterministically. The
//! embedder calls [`tick`] at the fixed rate with a fresh [`TickInput`]
//! snapshot each time.

use glam::Vec2;
use rand::Rng;

use super::collision::{outside_field, within};
use super::events::ScheduledEvent;
use super::state::{GamePhase, GameState, Projectile, Rock, Tier};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::{field_center, heading_to_direction, wrap_position};

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Rotate counter-clockwise
    pub turn_left: bool,
    /// Rotate clockwise
    pub turn_right: bool,
    /// Throttle on
    pub thrust: bool,
    /// Fire a projectile (rate-limited)
    pub fire: bool,
    /// Start a round from the welcome screen
    pub start: bool,
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Deferred transitions fire before anything else this tick
    while let Some(event) = state.events.pop_due(state.time_ticks) {
        apply_event(state, event);
    }

    match state.phase {
        GamePhase::Starting => {
            if input.start {
                reset_round(state);
            }
        }
        GamePhase::Playing => {
            try_fire(state, input);
            steer_ship(state, input);
            projectile_physics(state);
            rock_physics(state);
            // A death this tick halts the rest of the update
            if state.phase == GamePhase::Playing {
                move_ship(state);
                difficulty_ramp(state);
            }
        }
        GamePhase::Dying | GamePhase::GameOver => {
            // The classic game accepts fire in every non-welcome state;
            // shots queue up but nothing moves until Playing resumes.
            try_fire(state, input);
        }
    }
}

fn apply_event(state: &mut GameState, event: ScheduledEvent) {
    match event {
        ScheduledEvent::Respawn => {
            if state.lives < 1 {
                state.phase = GamePhase::GameOver;
                let due = state.time_ticks + state.tuning.game_over_delay_ticks;
                state.events.schedule(due, ScheduledEvent::ShowTitle);
                log::info!("game over, final score {}", state.score);
            } else {
                refield(state);
            }
        }
        ScheduledEvent::ShowTitle => {
            state.phase = GamePhase::Starting;
        }
    }
}

/// Start a fresh round from the welcome screen
fn reset_round(state: &mut GameState) {
    state.events.clear();
    state.rocks.clear();
    state.projectiles.clear();
    state.min_spawn_distance = state.tuning.min_spawn_distance;
    state.lives = state.tuning.starting_lives;
    state.score = 0;
    state.ramp_ticks = 0;
    state.last_fire_tick = None;
    state.respawn_ship();
    state.phase = GamePhase::Playing;

    for _ in 0..state.tuning.initial_rocks {
        spawn_rock(state, Tier::Large);
    }
    log::info!("round started (seed {})", state.seed);
}

/// Put the player back on the field after a death pause
fn refield(state: &mut GameState) {
    state.rocks.clear();
    state.projectiles.clear();
    state.respawn_ship();
    state.phase = GamePhase::Playing;

    for _ in 0..state.tuning.initial_rocks {
        spawn_rock(state, Tier::Large);
    }
}

fn steer_ship(state: &mut GameState, input: &TickInput) {
    let turn = state.tuning.turn_rate_deg;
    let drag = state.tuning.turn_drag;
    let accel = state.tuning.thrust_accel;
    let max_speed = state.tuning.max_ship_speed;
    let Some(ship) = state.ship.as_mut() else {
        return;
    };

    if input.turn_right {
        ship.angle = (ship.angle - turn).rem_euclid(360.0);
        if ship.speed > 0.0 {
            ship.speed -= drag;
        }
    }
    if input.turn_left {
        ship.angle = (ship.angle + turn).rem_euclid(360.0);
        if ship.speed > 0.0 {
            ship.speed -= drag;
        }
    }
    if input.thrust {
        ship.throttle_on = true;
        if ship.speed < max_speed {
            ship.speed += accel;
        }
    } else {
        ship.throttle_on = false;
    }
}

fn try_fire(state: &mut GameState, input: &TickInput) {
    if !input.fire {
        return;
    }
    let cooldown = u64::from(state.tuning.fire_cooldown_ticks);
    let ready = state
        .last_fire_tick
        .is_none_or(|t| state.time_ticks - t >= cooldown);
    if !ready {
        return;
    }
    let Some((pos, angle, dir)) = state.ship.as_ref().map(|s| (s.pos, s.angle, s.direction()))
    else {
        return;
    };

    // Muzzle sits one sprite ahead horizontally, half a sprite vertically
    let size = state.tuning.ship_size;
    let muzzle = pos + Vec2::new(dir.x * size, dir.y * size / 2.0);
    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        pos: muzzle,
        angle,
        speed: state.tuning.projectile_speed,
        traveled: 0.0,
    });
    state.last_fire_tick = Some(state.time_ticks);
}

fn move_ship(state: &mut GameState) {
    if let Some(ship) = state.ship.as_mut() {
        let dir = heading_to_direction(ship.angle);
        ship.pos = wrap_position(ship.pos + dir * ship.speed);
    }
}

fn projectile_physics(state: &mut GameState) {
    for p in &mut state.projectiles {
        let dir = heading_to_direction(p.angle);
        p.pos = wrap_position(p.pos + dir * p.speed);
        p.traveled += p.speed;
    }

    // Pairwise scan; the first overlapping rock consumes the projectile
    let mut i = 0;
    while i < state.projectiles.len() {
        let p_pos = state.projectiles[i].pos;
        let hit = state
            .rocks
            .iter()
            .position(|rock| within(p_pos, rock.pos, state.tuning.hit_radius.get(rock.tier)));
        if let Some(rock_idx) = hit {
            let rock = state.rocks.remove(rock_idx);
            state.projectiles.remove(i);
            destroy_rock(state, rock);
        } else {
            i += 1;
        }
    }

    // Spent projectiles expire past max range
    let max_range = state.tuning.projectile_max_range;
    state.projectiles.retain(|p| p.traveled <= max_range);
}

/// Score a destroyed rock and spawn its successors
fn destroy_rock(state: &mut GameState, rock: Rock) {
    state.score += state.tuning.score_value.get(rock.tier);
    match rock.tier.split() {
        Some(child) => {
            let offset = Vec2::new(state.tuning.split_offset, 0.0);
            spawn_rock_at(state, child, rock.pos + offset);
            spawn_rock_at(state, child, rock.pos - offset);
        }
        None => {
            // Clearing a small rock feeds a fresh large one back in
            try_spawn_rock(state, Tier::Large);
        }
    }
}

fn rock_physics(state: &mut GameState) {
    for rock in &mut state.rocks {
        rock.pos += rock.direction * rock.speed;
    }

    // Any overlap with the ship ends this life; first hit wins
    if let Some(ship_pos) = state.ship.as_ref().map(|s| s.pos) {
        let fatal = state
            .rocks
            .iter()
            .any(|rock| within(rock.pos, ship_pos, state.tuning.death_radius.get(rock.tier)));
        if fatal {
            die(state);
            return;
        }
    }

    // Rocks that drift past the field bound respawn at the same tier
    let mut i = 0;
    while i < state.rocks.len() {
        if outside_field(state.rocks[i].pos) {
            let tier = state.rocks.remove(i).tier;
            try_spawn_rock(state, tier);
        } else {
            i += 1;
        }
    }
}

fn die(state: &mut GameState) {
    state.lives = state.lives.saturating_sub(1);
    state.phase = GamePhase::Dying;
    let due = state.time_ticks + state.tuning.death_pause_ticks;
    state.events.schedule(due, ScheduledEvent::Respawn);
    log::info!("ship destroyed, {} lives left", state.lives);
}

fn difficulty_ramp(state: &mut GameState) {
    state.ramp_ticks += 1;
    if state.ramp_ticks < state.tuning.ramp_interval_ticks {
        return;
    }
    state.ramp_ticks = 0;

    if state.rocks.len() < state.tuning.ramp_rock_cap {
        spawn_rock(state, Tier::Large);
    }
    let floor = state.tuning.min_spawn_distance_floor;
    if state.min_spawn_distance > floor {
        state.min_spawn_distance =
            (state.min_spawn_distance - state.tuning.min_spawn_distance_step).max(floor);
    }
    log::debug!(
        "difficulty ramp: {} rocks live, min spawn distance {}",
        state.rocks.len(),
        state.min_spawn_distance
    );
}

/// Spawn a fresh rock at a random position, cap permitting
fn try_spawn_rock(state: &mut GameState, tier: Tier) {
    if state.rocks.len() < state.tuning.rock_cap {
        spawn_rock(state, tier);
    }
}

/// Spawn a fresh rock at a random position away from the ship
fn spawn_rock(state: &mut GameState, tier: Tier) {
    let margin = state.tuning.spawn_margin;
    let ship_pos = state
        .ship
        .as_ref()
        .map(|s| s.pos)
        .unwrap_or_else(field_center);

    let mut pos = Vec2::new(
        state.rng.random_range(margin..FIELD_WIDTH - margin),
        state.rng.random_range(margin..FIELD_HEIGHT - margin),
    );
    // Too close to the ship: re-roll across the whole field
    while pos.distance(ship_pos) < state.min_spawn_distance {
        pos = Vec2::new(
            state.rng.random_range(0.0..FIELD_WIDTH),
            state.rng.random_range(0.0..FIELD_HEIGHT),
        );
    }
    spawn_rock_at(state, tier, pos);
}

/// Spawn a rock at a fixed position with a fresh random drift direction
fn spawn_rock_at(state: &mut GameState, tier: Tier, pos: Vec2) {
    let id = state.next_entity_id();
    let direction = Vec2::new(
        state.rng.random_range(-1.0..1.0),
        state.rng.random_range(-1.0..1.0),
    );
    state.rocks.push(Rock {
        id,
        pos,
        tier,
        speed: state.tuning.rock_speed,
        direction,
    });
}
