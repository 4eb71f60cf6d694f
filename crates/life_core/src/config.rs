use serde::{Deserialize, Serialize};

use crate::backend::{Backend, BackendProfile};
use crate::constants::{MIN_COLORS, MIN_PARTICLES, OPACITY_MAX, RADIUS_MAX, RADIUS_MIN};
use crate::error::{ConfigError, ValidationError};
use crate::force::ForceFunction;

/// Default simulation parameters shared by every backend.
///
/// Serialized keys match the names the simulation frontends already read
/// (`colorsNumber`, `particlesCountGPU`, ...), so a record exported here can be
/// dropped into any of them unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationDefaults {
    /// Number of color buckets particles are partitioned into
    #[serde(rename = "colorsNumber")]
    pub colors_number: u32,
    /// Interaction distance on the GPU path (normalized, 0.0 - 1.0)
    #[serde(rename = "interactionRadius")]
    pub interaction_radius: f32,
    /// Interaction distance on the scripting/CPU path
    #[serde(rename = "interactionRadiusJS")]
    pub interaction_radius_js: f32,
    /// Interaction distance on the embedded path
    #[serde(rename = "interactionRadiusQTJS")]
    pub interaction_radius_qtjs: f32,
    #[serde(rename = "particlesCountGPU")]
    pub particles_count_gpu: u32,
    #[serde(rename = "particlesCountJS")]
    pub particles_count_js: u32,
    #[serde(rename = "particlesCountQTJS")]
    pub particles_count_qtjs: u32,
    /// Alpha used when drawing particles, in percent (0 - 100)
    pub opacity: u8,
    /// Force formula; backends fall back to their own when absent
    #[serde(rename = "forceFunction", default)]
    pub force_function: Option<ForceFunction>,
    /// Radius inside which particles repel instead of attract
    #[serde(rename = "repulsiveRadius", default)]
    pub repulsive_radius: Option<f32>,
}

/// The canonical defaults
pub const DEFAULTS: SimulationDefaults = SimulationDefaults {
    colors_number: 3,
    interaction_radius: 0.25,
    interaction_radius_js: 0.2,
    interaction_radius_qtjs: 0.02,
    particles_count_gpu: 64_000,
    particles_count_js: 750,
    particles_count_qtjs: 10_000,
    opacity: 50,
    force_function: Some(ForceFunction::from_static("1")),
    repulsive_radius: Some(0.05),
};

static CANONICAL: SimulationDefaults = DEFAULTS;

/// Process-wide read-only access to the canonical defaults.
/// Every call returns the same reference.
pub fn defaults() -> &'static SimulationDefaults {
    &CANONICAL
}

impl Default for SimulationDefaults {
    fn default() -> Self {
        DEFAULTS
    }
}

impl SimulationDefaults {
    pub fn particle_count(&self, backend: Backend) -> u32 {
        match backend {
            Backend::Gpu => self.particles_count_gpu,
            Backend::Js => self.particles_count_js,
            Backend::QtJs => self.particles_count_qtjs,
        }
    }

    /// The GPU path uses the reference `interactionRadius`
    pub fn interaction_radius_for(&self, backend: Backend) -> f32 {
        match backend {
            Backend::Gpu => self.interaction_radius,
            Backend::Js => self.interaction_radius_js,
            Backend::QtJs => self.interaction_radius_qtjs,
        }
    }

    pub fn profile(&self, backend: Backend) -> BackendProfile {
        BackendProfile {
            backend,
            particle_count: self.particle_count(backend),
            interaction_radius: self.interaction_radius_for(backend),
        }
    }

    /// Opacity as a blend factor.
    ///
    /// Opacity above 100 clamps to 1.0 here; `validate` still reports it as
    /// `OpacityOutOfRange`, so `check` a record before handing it out.
    pub fn alpha(&self) -> f32 {
        f32::from(self.opacity.min(OPACITY_MAX)) / f32::from(OPACITY_MAX)
    }

    /// Collect every broken invariant. Empty means the record is usable.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut issues = Vec::new();
        let in_range = |v: f32| (RADIUS_MIN..=RADIUS_MAX).contains(&v);

        let radii = [
            ("interactionRadius", self.interaction_radius),
            ("interactionRadiusJS", self.interaction_radius_js),
            ("interactionRadiusQTJS", self.interaction_radius_qtjs),
        ];
        for (field, value) in radii {
            if !in_range(value) {
                issues.push(ValidationError::RadiusOutOfRange { field, value });
            }
        }

        if let Some(repulsive) = self.repulsive_radius {
            if !in_range(repulsive) {
                issues.push(ValidationError::RadiusOutOfRange {
                    field: "repulsiveRadius",
                    value: repulsive,
                });
            } else if repulsive > self.interaction_radius {
                issues.push(ValidationError::RepulsiveExceedsInteraction {
                    repulsive,
                    interaction: self.interaction_radius,
                });
            }
        }

        if self.opacity > OPACITY_MAX {
            issues.push(ValidationError::OpacityOutOfRange(self.opacity));
        }

        for backend in Backend::ALL {
            if self.particle_count(backend) < MIN_PARTICLES {
                issues.push(ValidationError::ZeroParticles(backend));
            }
        }

        if self.colors_number < MIN_COLORS {
            issues.push(ValidationError::ZeroColors);
        }

        issues
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        let issues = self.validate();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(issues))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_values_pinned() {
        let d = defaults();
        assert_eq!(d.colors_number, 3);
        assert_eq!(d.particles_count_gpu, 64_000);
        assert_eq!(d.particles_count_js, 750);
        assert_eq!(d.particles_count_qtjs, 10_000);
        assert_eq!(d.interaction_radius, 0.25);
        assert_eq!(d.interaction_radius_js, 0.2);
        assert_eq!(d.interaction_radius_qtjs, 0.02);
        assert_eq!(d.opacity, 50);
        assert_eq!(d.force_function.as_ref().map(|f| f.as_str()), Some("1"));
        assert_eq!(d.repulsive_radius, Some(0.05));
    }

    #[test]
    fn test_canonical_passes_validation() {
        assert!(DEFAULTS.validate().is_empty());
        assert!(DEFAULTS.check().is_ok());
    }

    #[test]
    fn test_repeated_reads_identical() {
        assert!(std::ptr::eq(defaults(), defaults()));
        assert_eq!(SimulationDefaults::default(), *defaults());
    }

    #[test]
    fn test_concurrent_readers() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| defaults().particles_count_gpu))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 64_000);
        }
    }

    #[test]
    fn test_profiles_per_backend() {
        let gpu = DEFAULTS.profile(Backend::Gpu);
        assert_eq!(gpu.particle_count, 64_000);
        assert_eq!(gpu.interaction_radius, 0.25);

        let js = DEFAULTS.profile(Backend::Js);
        assert_eq!(js.particle_count, 750);
        assert_eq!(js.interaction_radius, 0.2);

        let qt = DEFAULTS.profile(Backend::QtJs);
        assert_eq!(qt.particle_count, 10_000);
        assert_eq!(qt.interaction_radius, 0.02);
    }

    #[test]
    fn test_alpha() {
        assert!((DEFAULTS.alpha() - 0.5).abs() < 1e-6);
        let opaque = SimulationDefaults { opacity: 100, ..DEFAULTS };
        assert_eq!(opaque.alpha(), 1.0);
    }

    #[test]
    fn test_alpha_clamps_but_validation_still_flags() {
        let over = SimulationDefaults { opacity: 150, ..DEFAULTS };
        assert_eq!(over.alpha(), 1.0);
        assert_eq!(over.validate(), vec![ValidationError::OpacityOutOfRange(150)]);
        assert!(over.check().is_err());
    }

    #[test]
    fn test_validate_reports_each_issue() {
        let broken = SimulationDefaults {
            colors_number: 0,
            interaction_radius: 1.5,
            interaction_radius_qtjs: f32::NAN,
            particles_count_js: 0,
            opacity: 120,
            ..DEFAULTS
        };
        let issues = broken.validate();
        assert_eq!(issues.len(), 5);
        assert!(issues.contains(&ValidationError::ZeroColors));
        assert!(issues.contains(&ValidationError::OpacityOutOfRange(120)));
        assert!(issues.contains(&ValidationError::ZeroParticles(Backend::Js)));
        assert!(issues.contains(&ValidationError::RadiusOutOfRange {
            field: "interactionRadius",
            value: 1.5,
        }));
        assert!(issues.iter().any(|i| matches!(
            i,
            ValidationError::RadiusOutOfRange { field: "interactionRadiusQTJS", .. }
        )));
        assert!(matches!(broken.check(), Err(ConfigError::Invalid(v)) if v.len() == 5));
    }

    #[test]
    fn test_repulsive_must_fit_inside_interaction() {
        let cfg = SimulationDefaults {
            repulsive_radius: Some(0.3),
            ..DEFAULTS
        };
        assert_eq!(
            cfg.validate(),
            vec![ValidationError::RepulsiveExceedsInteraction {
                repulsive: 0.3,
                interaction: 0.25,
            }]
        );

        let cfg = SimulationDefaults {
            repulsive_radius: Some(-0.1),
            ..DEFAULTS
        };
        assert!(matches!(
            cfg.validate().as_slice(),
            [ValidationError::RadiusOutOfRange { field: "repulsiveRadius", .. }]
        ));
    }

    #[test]
    fn test_serialized_keys_match_frontend_names() {
        let json = serde_json::to_value(&DEFAULTS).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "colorsNumber",
            "interactionRadius",
            "interactionRadiusJS",
            "interactionRadiusQTJS",
            "particlesCountGPU",
            "particlesCountJS",
            "particlesCountQTJS",
            "opacity",
            "forceFunction",
            "repulsiveRadius",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj.len(), 10);
        assert_eq!(json["forceFunction"], "1");
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let json = r#"{
            "colorsNumber": 5,
            "interactionRadius": 0.25,
            "interactionRadiusJS": 0.2,
            "interactionRadiusQTJS": 0.02,
            "particlesCountGPU": 64000,
            "particlesCountJS": 750,
            "particlesCountQTJS": 10000,
            "opacity": 50
        }"#;
        let cfg: SimulationDefaults = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.colors_number, 5);
        assert!(cfg.force_function.is_none());
        assert!(cfg.repulsive_radius.is_none());
    }
}
