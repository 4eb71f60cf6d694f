use bytemuck::{Pod, Zeroable};

use crate::backend::Backend;
use crate::config::SimulationDefaults;

/// GPU-path parameters in uniform buffer layout.
/// Must be repr(C) and Pod for upload; 32 bytes, 16-byte aligned size.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuSimParams {
    pub particle_count: u32,
    pub colors_number: u32,
    pub interaction_radius: f32,
    /// 0.0 when no repulsive zone is configured
    pub repulsive_radius: f32,
    /// Opacity as 0.0 - 1.0, clamped
    pub alpha: f32,
    /// Numeric force id + 1. 0 means no force selected (or a non-numeric id),
    /// so the shader falls back to its built-in formula.
    pub force_function: u32,
    pub _pad1: u32,
    pub _pad2: u32,
}

impl GpuSimParams {
    /// Workgroup size the GPU path dispatches with
    pub const WORKGROUP_SIZE: u32 = 256;

    /// Workgroups needed to cover every particle once
    pub fn workgroups(&self) -> u32 {
        self.particle_count.div_ceil(Self::WORKGROUP_SIZE)
    }

    /// Force id as written in the record, if one is selected
    pub fn force_index(&self) -> Option<u32> {
        self.force_function.checked_sub(1)
    }
}

impl SimulationDefaults {
    /// Pack the GPU-path values. Meant for records that passed `check`;
    /// out-of-range opacity is clamped rather than reported.
    pub fn gpu_params(&self) -> GpuSimParams {
        GpuSimParams {
            particle_count: self.particle_count(Backend::Gpu),
            colors_number: self.colors_number,
            interaction_radius: self.interaction_radius_for(Backend::Gpu),
            repulsive_radius: self.repulsive_radius.unwrap_or(0.0),
            alpha: self.alpha(),
            force_function: self
                .force_function
                .as_ref()
                .and_then(|f| f.index())
                .and_then(|i| i.checked_add(1))
                .unwrap_or(0),
            _pad1: 0,
            _pad2: 0,
        }
    }
}
