use life_core::{SimulationDefaults, SimulationOverrides};
use std::path::{Path, PathBuf};

use crate::format::load_overrides;

/// Result of layering override files over a base record
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub config: SimulationDefaults,
    /// Files that were applied, in order
    pub used: Vec<PathBuf>,
    /// One message per file that could not be read or parsed
    pub errors: Vec<String>,
}

impl LayeredConfig {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Apply every readable override file over `base`, later files winning.
/// Broken files are skipped and reported in `errors`, never fatal.
pub fn load_layered<P, I>(base: &SimulationDefaults, paths: I) -> LayeredConfig
where
    P: AsRef<Path>,
    I: IntoIterator<Item = P>,
{
    let mut merged = SimulationOverrides::default();
    let mut used = Vec::new();
    let mut errors = Vec::new();

    for p in paths {
        let path = p.as_ref();
        match load_overrides(path) {
            Ok(layer) => {
                log::debug!("applying config layer {}", path.display());
                merged.merge(layer);
                used.push(path.to_path_buf());
            }
            Err(e) => {
                log::warn!("skipping config layer {}: {e}", path.display());
                errors.push(format!("{}: {e}", path.display()));
            }
        }
    }

    LayeredConfig {
        config: base.apply(&merged),
        used,
        errors,
    }
}
