use glam::Vec2;
use log::warn;

use crate::gpu;

/// Single tunable setting: current value, valid range and the
/// significant-change threshold below which slider-style writes are ignored.
#[derive(Clone, Copy, Debug)]
pub struct Tunable {
    value: f32,
    threshold: f32,
    min: f32,
    max: f32,
}

impl Tunable {
    pub const fn new(value: f32, threshold: f32, min: f32, max: f32) -> Self {
        Self {
            value,
            threshold,
            min,
            max,
        }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    /// Stores `value`, reporting whether anything has to be re-uploaded.
    ///
    /// With `check_threshold` the write is dropped when it differs from the
    /// current value by less than the threshold - that's what keeps
    /// continuous UI input from flooding the GPU with uploads; programmatic
    /// writes pass `false` and always go through.
    pub fn set(&mut self, value: f32, check_threshold: bool) -> bool {
        let clamped = value.clamp(self.min, self.max);

        if clamped != value {
            warn!(
                "Clamped out-of-range value {value} into [{}, {}]",
                self.min, self.max,
            );
        }

        if check_threshold && (clamped - self.value).abs() < self.threshold {
            return false;
        }

        self.value = clamped;
        true
    }
}

/// Every tunable of the pipeline, with the thresholds and ranges each setter
/// enforces; this is the host-side source of truth the GPU parameter blocks
/// are rebuilt from.
#[derive(Clone, Copy, Debug)]
pub struct EffectParams {
    pub iterations: Tunable,
    pub ao_intensity: Tunable,
    pub ao_radius: Tunable,
    pub do_intensity: Tunable,
    pub do_radius: Tunable,
    pub sss_intensity: Tunable,
    pub sss_shadow_length: Tunable,
    pub sss_shadow_bias: Tunable,
    pub sss_step_size: Tunable,
}

impl Default for EffectParams {
    fn default() -> Self {
        Self {
            iterations: Tunable::new(16.0, 1.0, 1.0, 64.0),
            ao_intensity: Tunable::new(1.0, 0.01, 0.0, 100.0),
            ao_radius: Tunable::new(250.0, 0.001, 0.0, 10000.0),
            do_intensity: Tunable::new(2.0, 0.01, 0.0, 100.0),
            do_radius: Tunable::new(2000.0, 0.1, 0.0, 100000.0),
            sss_intensity: Tunable::new(0.73, 0.01, 0.0, 10.0),
            sss_shadow_length: Tunable::new(0.5, 0.01, 0.0, 10.0),
            sss_shadow_bias: Tunable::new(0.008, 0.01, 0.0, 1.0),
            sss_step_size: Tunable::new(0.008, 0.0001, 0.0001, 1.0),
        }
    }
}

impl EffectParams {
    pub fn ao_block(
        &self,
        history_weight: f32,
        noise_tiling: Vec2,
    ) -> gpu::OcclusionPassParams {
        gpu::OcclusionPassParams {
            iterations: self.iterations.get() as u32,
            history_weight,
            intensity: self.ao_intensity.get(),
            radius: self.ao_radius.get(),
            noise_tiling,
            ..Default::default()
        }
    }

    pub fn do_block(
        &self,
        history_weight: f32,
        noise_tiling: Vec2,
    ) -> gpu::OcclusionPassParams {
        gpu::OcclusionPassParams {
            iterations: self.iterations.get() as u32,
            history_weight,
            intensity: self.do_intensity.get(),
            radius: self.do_radius.get(),
            noise_tiling,
            ..Default::default()
        }
    }

    pub fn gi_block(
        &self,
        history_weight: f32,
        noise_tiling: Vec2,
    ) -> gpu::GlobalIlluminationPassParams {
        gpu::GlobalIlluminationPassParams {
            iterations: self.iterations.get() as u32,
            history_weight,
            ao_intensity: self.ao_intensity.get(),
            ao_radius: self.ao_radius.get(),
            do_intensity: self.do_intensity.get(),
            do_radius: self.do_radius.get(),
            noise_tiling,
            ..Default::default()
        }
    }

    pub fn sss_block(&self) -> gpu::ShadowsPassParams {
        gpu::ShadowsPassParams {
            shadow_length: self.sss_shadow_length.get(),
            shadow_bias: self.sss_shadow_bias.get(),
            step_size: self.sss_step_size.get(),
            intensity: self.sss_intensity.get(),
            light: Default::default(),
        }
    }
}

/// Bundle of tunables applied in one go; mirrors how scenes ship their own
/// tuned defaults.
#[derive(Clone, Copy, Debug)]
pub struct Preset {
    pub ao_intensity: f32,
    pub ao_radius: f32,
    pub do_intensity: f32,
    pub do_radius: f32,
    pub sss_intensity: f32,
    pub sss_shadow_length: f32,
    pub sss_shadow_bias: f32,
    pub sss_step_size: f32,
}

impl Preset {
    /// Tuning for small, enclosed scenes with strong bounce lighting.
    pub fn cornell_box() -> Self {
        Self {
            ao_intensity: 2.0,
            ao_radius: 250.0,
            do_intensity: 8.0,
            do_radius: 4000.0,
            sss_intensity: 1.0,
            sss_shadow_length: 1.2,
            sss_shadow_bias: 0.02,
            sss_step_size: 0.02,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_suppresses_small_changes() {
        let mut target = Tunable::new(250.0, 0.001, 0.0, 10000.0);

        assert!(!target.set(250.0005, true));
        assert_eq!(250.0, target.get());

        assert!(target.set(250.0005, false));
        assert_eq!(250.0005, target.get());
    }

    #[test]
    fn threshold_passes_significant_changes() {
        let mut target = Tunable::new(1.0, 0.01, 0.0, 100.0);

        assert!(target.set(1.5, true));
        assert_eq!(1.5, target.get());
    }

    #[test]
    fn clamps_to_declared_range() {
        let mut target = Tunable::new(0.008, 0.0001, 0.0001, 1.0);

        assert!(target.set(-5.0, false));
        assert_eq!(0.0001, target.get());

        assert!(target.set(100.0, false));
        assert_eq!(1.0, target.get());
    }

    #[test]
    fn unchecked_writes_always_apply() {
        let mut target = Tunable::new(16.0, 1.0, 1.0, 64.0);

        // Below-threshold delta, but the write is programmatic
        assert!(target.set(16.4, false));
        assert_eq!(16.4, target.get());
    }
}
