use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Execution path a simulation runs on.
/// Each path has its own particle budget and interaction radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Compute shaders; by far the largest particle budget
    Gpu,
    /// General-purpose scripting runtime on the CPU
    Js,
    /// Constrained embedded scripting runtime
    QtJs,
}

impl Backend {
    pub const ALL: [Backend; 3] = [Backend::Gpu, Backend::Js, Backend::QtJs];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Gpu => "gpu",
            Self::Js => "js",
            Self::QtJs => "qtjs",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gpu" => Ok(Self::Gpu),
            "js" => Ok(Self::Js),
            "qtjs" => Ok(Self::QtJs),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

/// The slice of the defaults one backend consumes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackendProfile {
    pub backend: Backend,
    #[serde(rename = "particlesCount")]
    pub particle_count: u32,
    #[serde(rename = "interactionRadius")]
    pub interaction_radius: f32,
}
