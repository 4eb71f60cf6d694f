// Bounds checked by validation.
// Radii are normalized to the simulation area (1.0 = full width).

/// Smallest accepted interaction/repulsive radius
pub const RADIUS_MIN: f32 = 0.0;

/// Largest accepted interaction/repulsive radius
pub const RADIUS_MAX: f32 = 1.0;

/// Opacity is a percentage
pub const OPACITY_MAX: u8 = 100;

/// A backend must simulate at least one particle
pub const MIN_PARTICLES: u32 = 1;

/// At least one color bucket is needed to partition particles
pub const MIN_COLORS: u32 = 1;
