use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{DEFAULTS, SimulationDefaults};
use crate::error::ConfigError;

/// Derived from the canonical defaults: five color buckets, no force
/// selection (backends use their own) and no repulsive zone. Every other
/// value is the canonical one.
pub const FIVE_COLORS: SimulationDefaults = SimulationDefaults {
    colors_number: 5,
    interaction_radius: 0.25,
    interaction_radius_js: 0.2,
    interaction_radius_qtjs: 0.02,
    particles_count_gpu: 64_000,
    particles_count_js: 750,
    particles_count_qtjs: 10_000,
    opacity: 50,
    force_function: None,
    repulsive_radius: None,
};

static CANONICAL_PRESET: SimulationDefaults = DEFAULTS;
static FIVE_COLORS_PRESET: SimulationDefaults = FIVE_COLORS;

/// Named starting points for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    Canonical,
    FiveColors,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Canonical, Preset::FiveColors];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Canonical => "canonical",
            Self::FiveColors => "five-colors",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Canonical => "3 colors, force function 1, repulsive radius 0.05",
            Self::FiveColors => "canonical with 5 colors, no force function or repulsive zone",
        }
    }

    pub fn defaults(&self) -> &'static SimulationDefaults {
        match self {
            Self::Canonical => &CANONICAL_PRESET,
            Self::FiveColors => &FIVE_COLORS_PRESET,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" | "default" => Ok(Self::Canonical),
            "five-colors" | "five_colors" => Ok(Self::FiveColors),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }
}
