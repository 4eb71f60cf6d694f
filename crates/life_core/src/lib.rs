pub mod backend;
pub mod config;
pub mod constants;
pub mod error;
pub mod force;
pub mod overrides;
pub mod preset;
pub mod uniform;

pub use backend::{Backend, BackendProfile};
pub use config::{DEFAULTS, SimulationDefaults, defaults};
pub use constants::*;
pub use error::{ConfigError, ValidationError};
pub use force::ForceFunction;
pub use overrides::SimulationOverrides;
pub use preset::Preset;
pub use uniform::GpuSimParams;
