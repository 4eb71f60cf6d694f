use thiserror::Error;

use crate::backend::Backend;

/// A single broken invariant found by `SimulationDefaults::validate`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} = {value} is outside 0..=1")]
    RadiusOutOfRange { field: &'static str, value: f32 },

    #[error("opacity = {0} is outside 0..=100")]
    OpacityOutOfRange(u8),

    #[error("particle count for the {0} backend is 0")]
    ZeroParticles(Backend),

    #[error("colorsNumber is 0; particles need at least one color")]
    ZeroColors,

    #[error("repulsiveRadius {repulsive} exceeds interactionRadius {interaction}")]
    RepulsiveExceedsInteraction { repulsive: f32, interaction: f32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration ({} issue(s))", .0.len())]
    Invalid(Vec<ValidationError>),

    #[error("unknown backend '{0}' (expected gpu, js or qtjs)")]
    UnknownBackend(String),

    #[error("unknown preset '{0}' (expected canonical or five-colors)")]
    UnknownPreset(String),
}
