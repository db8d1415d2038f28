//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick rate only
//! - Seeded RNG only
//! - Stable entity order (insertion/id order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod state;
pub mod tick;

pub use collision::{outside_field, within};
pub use events::{EventQueue, ScheduledEvent};
pub use state::{GamePhase, GameState, Projectile, Rock, Ship, Tier};
pub use tick::{TickInput, tick};
