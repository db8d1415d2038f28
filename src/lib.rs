//! Rock Blaster - a classic splitting-rocks arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (classic arcade cadence)
    pub const TICK_HZ: u32 = 30;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
}

/// Convert a heading in degrees (0 = up, increasing counter-clockwise) to a
/// unit direction vector in screen coordinates (Y grows downward).
#[inline]
pub fn heading_to_direction(angle_deg: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new((-rad).sin(), -rad.cos())
}

/// Reduce a position component into [0, size).
#[inline]
pub fn wrap_coord(value: f32, size: f32) -> f32 {
    let wrapped = value.rem_euclid(size);
    // rem_euclid of a tiny negative can round up to exactly `size`
    if wrapped >= size { wrapped - size } else { wrapped }
}

/// Reduce a position into [0, width) x [0, height).
#[inline]
pub fn wrap_position(pos: Vec2) -> Vec2 {
    Vec2::new(
        wrap_coord(pos.x, consts::FIELD_WIDTH),
        wrap_coord(pos.y, consts::FIELD_HEIGHT),
    )
}

/// Center of the field.
#[inline]
pub fn field_center() -> Vec2 {
    Vec2::new(consts::FIELD_WIDTH / 2.0, consts::FIELD_HEIGHT / 2.0)
}

/// Radius of the circle bounding the whole field, measured from its center.
/// Rocks that drift past it are recycled.
#[inline]
pub fn field_bound_radius() -> f32 {
    (consts::FIELD_WIDTH / 2.0).hypot(consts::FIELD_HEIGHT / 2.0)
}
