use crate::gpu;

/// Which passes are allowed to dispatch; flipped from UI/input callbacks and
/// observed by the orchestrator starting with the next frame.
#[derive(Clone, Copy, Debug)]
pub struct Toggles {
    pub master: bool,
    pub ambient_occlusion: bool,
    pub directional_occlusion: bool,
    pub shadows: bool,
    pub blur: bool,
}

impl Default for Toggles {
    fn default() -> Self {
        Self {
            master: false,
            ambient_occlusion: true,
            directional_occlusion: true,
            shadows: true,
            blur: true,
        }
    }
}

/// Which of the occlusion-family passes runs this frame; at most one does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OcclusionMode {
    Fused,
    AmbientOnly,
    DirectionalOnly,
}

impl Toggles {
    pub fn occlusion_mode(&self) -> Option<OcclusionMode> {
        if !self.master {
            return None;
        }

        match (self.ambient_occlusion, self.directional_occlusion) {
            (true, true) => Some(OcclusionMode::Fused),
            (true, false) => Some(OcclusionMode::AmbientOnly),
            (false, true) => Some(OcclusionMode::DirectionalOnly),
            (false, false) => None,
        }
    }

    pub fn indirect_active(&self) -> bool {
        self.occlusion_mode().is_some()
    }

    /// Blur only makes sense over an occlusion result.
    pub fn blur_active(&self) -> bool {
        self.blur && self.indirect_active()
    }

    pub fn shadows_active(&self) -> bool {
        self.master && self.shadows
    }

    pub fn composition_params(&self) -> gpu::CompositionPassParams {
        gpu::CompositionPassParams {
            indirect_active: self.indirect_active() as u32,
            shadows_active: self.shadows_active() as u32,
            blur_active: self.blur_active() as u32,
            _pad: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> Toggles {
        Toggles {
            master: true,
            ..Default::default()
        }
    }

    #[test]
    fn master_gates_everything() {
        let target = Toggles::default();

        assert_eq!(None, target.occlusion_mode());
        assert!(!target.shadows_active());
        assert!(!target.blur_active());
    }

    #[test]
    fn occlusion_mode_follows_toggles() {
        let mut target = enabled();

        assert_eq!(Some(OcclusionMode::Fused), target.occlusion_mode());

        // ---
        // Toggling AO off while DO stays on falls back to the standalone
        // directional pass

        target.ambient_occlusion = false;

        assert_eq!(
            Some(OcclusionMode::DirectionalOnly),
            target.occlusion_mode(),
        );

        // ---

        target.ambient_occlusion = true;
        target.directional_occlusion = false;

        assert_eq!(Some(OcclusionMode::AmbientOnly), target.occlusion_mode());

        // ---

        target.ambient_occlusion = false;

        assert_eq!(None, target.occlusion_mode());
    }

    #[test]
    fn blur_requires_occlusion() {
        let mut target = enabled();

        assert!(target.blur_active());

        target.ambient_occlusion = false;
        target.directional_occlusion = false;

        assert!(!target.blur_active());

        // Shadows stay independent from the occlusion family
        assert!(target.shadows_active());
    }

    #[test]
    fn composition_params_serialize_flags() {
        let params = enabled().composition_params();

        assert_eq!(1, params.indirect_active);
        assert_eq!(1, params.shadows_active);
        assert_eq!(1, params.blur_active);

        let params = Toggles::default().composition_params();

        assert_eq!(0, params.indirect_active);
        assert_eq!(0, params.shadows_active);
        assert_eq!(0, params.blur_active);
    }
}
