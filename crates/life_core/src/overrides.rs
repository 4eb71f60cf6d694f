use serde::{Deserialize, Deserializer, Serialize};

use crate::config::SimulationDefaults;
use crate::force::ForceFunction;

/// Partial record layered over a preset, e.g. per deployment target.
///
/// Absent keys keep the underlying value. The two optional record fields are
/// three-state: absent keeps, `null`/`None` clears, a value replaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationOverrides {
    #[serde(rename = "colorsNumber")]
    pub colors_number: Option<u32>,
    #[serde(rename = "interactionRadius")]
    pub interaction_radius: Option<f32>,
    #[serde(rename = "interactionRadiusJS")]
    pub interaction_radius_js: Option<f32>,
    #[serde(rename = "interactionRadiusQTJS")]
    pub interaction_radius_qtjs: Option<f32>,
    #[serde(rename = "particlesCountGPU")]
    pub particles_count_gpu: Option<u32>,
    #[serde(rename = "particlesCountJS")]
    pub particles_count_js: Option<u32>,
    #[serde(rename = "particlesCountQTJS")]
    pub particles_count_qtjs: Option<u32>,
    pub opacity: Option<u8>,
    #[serde(
        rename = "forceFunction",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub force_function: Option<Option<ForceFunction>>,
    #[serde(
        rename = "repulsiveRadius",
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub repulsive_radius: Option<Option<f32>>,
}

/// Only called when the key is there, so an explicit null becomes `Some(None)`
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl SimulationOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Later layers win, including layers that clear an optional field
    pub fn merge(&mut self, other: SimulationOverrides) {
        self.colors_number = other.colors_number.or(self.colors_number);
        self.interaction_radius = other.interaction_radius.or(self.interaction_radius);
        self.interaction_radius_js = other.interaction_radius_js.or(self.interaction_radius_js);
        self.interaction_radius_qtjs = other
            .interaction_radius_qtjs
            .or(self.interaction_radius_qtjs);
        self.particles_count_gpu = other.particles_count_gpu.or(self.particles_count_gpu);
        self.particles_count_js = other.particles_count_js.or(self.particles_count_js);
        self.particles_count_qtjs = other.particles_count_qtjs.or(self.particles_count_qtjs);
        self.opacity = other.opacity.or(self.opacity);
        self.force_function = other.force_function.or(self.force_function.take());
        self.repulsive_radius = other.repulsive_radius.or(self.repulsive_radius);
    }
}

/// A full record overrides every key, clearing optionals it does not carry
impl From<SimulationDefaults> for SimulationOverrides {
    fn from(d: SimulationDefaults) -> Self {
        Self {
            colors_number: Some(d.colors_number),
            interaction_radius: Some(d.interaction_radius),
            interaction_radius_js: Some(d.interaction_radius_js),
            interaction_radius_qtjs: Some(d.interaction_radius_qtjs),
            particles_count_gpu: Some(d.particles_count_gpu),
            particles_count_js: Some(d.particles_count_js),
            particles_count_qtjs: Some(d.particles_count_qtjs),
            opacity: Some(d.opacity),
            force_function: Some(d.force_function),
            repulsive_radius: Some(d.repulsive_radius),
        }
    }
}

impl SimulationDefaults {
    /// New record with `overrides` applied; `self` is left untouched
    pub fn apply(&self, overrides: &SimulationOverrides) -> SimulationDefaults {
        let o = overrides;
        SimulationDefaults {
            colors_number: o.colors_number.unwrap_or(self.colors_number),
            interaction_radius: o.interaction_radius.unwrap_or(self.interaction_radius),
            interaction_radius_js: o.interaction_radius_js.unwrap_or(self.interaction_radius_js),
            interaction_radius_qtjs: o
                .interaction_radius_qtjs
                .unwrap_or(self.interaction_radius_qtjs),
            particles_count_gpu: o.particles_count_gpu.unwrap_or(self.particles_count_gpu),
            particles_count_js: o.particles_count_js.unwrap_or(self.particles_count_js),
            particles_count_qtjs: o.particles_count_qtjs.unwrap_or(self.particles_count_qtjs),
            opacity: o.opacity.unwrap_or(self.opacity),
            force_function: match &o.force_function {
                Some(force) => force.clone(),
                None => self.force_function.clone(),
            },
            repulsive_radius: o.repulsive_radius.unwrap_or(self.repulsive_radius),
        }
    }
}
