use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

use crate::Light;

/// Parameter block of the standalone occlusion passes.
///
/// The ambient and directional variants carry the same fields; each pass owns
/// its own buffer so toggling one never touches the other's state.
///
/// Layout matches the WGSL uniform declaration: scalars first, then the
/// vec2 fields on 8-byte boundaries, 48 bytes total.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct OcclusionPassParams {
    pub iterations: u32,
    pub history_weight: f32,
    pub intensity: f32,
    pub radius: f32,
    pub noise_tiling: Vec2,
    pub jitter_a: Vec2,
    pub jitter_b: Vec2,
    pub _pad: Vec2,
}

/// Parameter block of the fused AO+DO pass.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GlobalIlluminationPassParams {
    pub iterations: u32,
    pub history_weight: f32,
    pub ao_intensity: f32,
    pub ao_radius: f32,
    pub do_intensity: f32,
    pub do_radius: f32,
    pub noise_tiling: Vec2,
    pub jitter_a: Vec2,
    pub jitter_b: Vec2,
}

/// Parameter block of the screen-space shadows pass.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ShadowsPassParams {
    pub shadow_length: f32,
    pub shadow_bias: f32,
    pub step_size: f32,
    pub intensity: f32,
    pub light: Light,
}

/// Push constants of the composition pass.
///
/// The composite shader branches into identity behavior when a flag is zero,
/// so disabling an effect never requires swapping shader programs.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CompositionPassParams {
    pub indirect_active: u32,
    pub shadows_active: u32,
    pub blur_active: u32,
    pub _pad: u32,
}

impl ShadowsPassParams {
    pub fn light_vector(&self) -> Vec4 {
        self.light.d0
    }
}

#[cfg(test)]
mod tests {
    use std::mem;

    use super::*;

    /// Uniform blocks must stay at sizes the WGSL declarations expect; a
    /// drifted field would bind fine and then read garbage.
    #[test]
    fn layout() {
        assert_eq!(48, mem::size_of::<OcclusionPassParams>());
        assert_eq!(48, mem::size_of::<GlobalIlluminationPassParams>());
        assert_eq!(32, mem::size_of::<ShadowsPassParams>());
        assert_eq!(16, mem::size_of::<CompositionPassParams>());

        assert_eq!(0, mem::size_of::<OcclusionPassParams>() % 16);
        assert_eq!(0, mem::size_of::<GlobalIlluminationPassParams>() % 16);
        assert_eq!(0, mem::size_of::<ShadowsPassParams>() % 16);
    }
}
